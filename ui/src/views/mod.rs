//! Routed pages. Platform crates mount these in their `Route` enums.

mod home;
mod jobs;

pub use home::Home;
pub use jobs::Jobs;
