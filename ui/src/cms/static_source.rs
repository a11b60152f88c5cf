use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use super::{CmsError, ContentQuery, ContentSource};

const STATIC_API_BASE: &str = "http://cms.invalid/api";

/// Canned CMS responses keyed by endpoint, for previews and tests.
///
/// Endpoints without a canned response answer HTTP 404, the same way the
/// CMS answers for a content type that was never created. Every query is
/// recorded so callers can assert on what was requested.
#[derive(Debug, Default)]
pub struct StaticSource {
    responses: HashMap<String, Result<Value, CmsError>>,
    requests: RefCell<Vec<ContentQuery>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `{ "data": data }` for `endpoint`.
    pub fn with_data(mut self, endpoint: &str, data: Value) -> Self {
        self.responses
            .insert(endpoint.to_string(), Ok(serde_json::json!({ "data": data })));
        self
    }

    /// Serve a raw body for `endpoint`.
    pub fn with_body(mut self, endpoint: &str, body: Value) -> Self {
        self.responses.insert(endpoint.to_string(), Ok(body));
        self
    }

    pub fn with_error(mut self, endpoint: &str, error: CmsError) -> Self {
        self.responses.insert(endpoint.to_string(), Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ContentQuery> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl ContentSource for StaticSource {
    async fn fetch(&self, query: &ContentQuery) -> Result<Value, CmsError> {
        self.requests.borrow_mut().push(query.clone());
        query.url(STATIC_API_BASE)?;

        self.responses
            .get(query.endpoint)
            .cloned()
            .unwrap_or_else(|| {
                Err(CmsError::Status {
                    endpoint: query.endpoint.to_string(),
                    status: 404,
                })
            })
    }
}
