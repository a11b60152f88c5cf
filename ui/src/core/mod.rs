//! Platform-agnostic plumbing: site configuration, local persistence and presentation helpers.

pub mod config;
pub mod format;
pub mod section;
pub mod storage;

pub use section::Section;
