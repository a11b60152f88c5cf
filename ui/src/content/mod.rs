//! Content loading: one concurrent batch of CMS requests per page view.
//!
//! Each content type is fetched independently. A request that fails on its
//! own (network error, non-success status, unreadable body) leaves that
//! content type empty and is remembered in the result's `failed` list; the
//! batch carries on. Only setup errors that would break every request
//! (bad CMS URL, bad locale tag) fail the batch with a [`LoadError`].

mod jobs;
mod kind;
mod loader;

pub use jobs::{load_job_board, JobBoardContent};
pub use kind::ContentKind;
pub use loader::{load_page_content, PageContent};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::cms::{envelope, CmsError};

/// A failure that prevents the page from rendering at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error(transparent)]
    Cms(#[from] CmsError),
}

/// Sorts the outcome of each request into "usable payload", "recoverable
/// miss" (recorded, rendered as empty) or "batch failure".
#[derive(Debug, Default)]
pub(crate) struct Settled {
    pub(crate) failed: Vec<ContentKind>,
}

impl Settled {
    fn payload(
        &mut self,
        kind: ContentKind,
        result: Result<Value, CmsError>,
    ) -> Result<Option<Value>, LoadError> {
        match result {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.is_recoverable() => {
                warn!(content = %kind, error = %err, "content fetch failed; rendering without it");
                self.failed.push(kind);
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub(crate) fn collection<T: DeserializeOwned>(
        &mut self,
        kind: ContentKind,
        result: Result<Value, CmsError>,
    ) -> Result<Vec<T>, LoadError> {
        Ok(self
            .payload(kind, result)?
            .map(|payload| envelope::records(&payload))
            .unwrap_or_default())
    }

    pub(crate) fn single<T: DeserializeOwned>(
        &mut self,
        kind: ContentKind,
        result: Result<Value, CmsError>,
    ) -> Result<Option<T>, LoadError> {
        Ok(self
            .payload(kind, result)?
            .and_then(|payload| envelope::first(&payload)))
    }
}
