//! Job board: categories and listings from the CMS.

mod board;
pub mod view;

pub use board::{ApiStatusPanel, CategoryGrid, JobListings};
pub use view::{category_emoji, category_icon, JobBoardView, JobCard};
