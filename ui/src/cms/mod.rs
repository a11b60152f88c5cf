//! REST access to the headless CMS.
//!
//! [`ContentQuery`] describes one request (endpoint plus `populate`, `sort`
//! and `locale` directives), [`ContentSource`] performs it, and
//! [`envelope`] unwraps the `{ "data": ... }` response body into typed
//! records.

mod client;
pub mod envelope;
mod error;
mod query;
mod static_source;

pub use client::{CmsClient, ContentSource};
pub use error::CmsError;
pub use query::ContentQuery;
pub use static_source::StaticSource;
