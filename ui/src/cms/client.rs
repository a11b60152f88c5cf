use serde_json::Value;
use tracing::debug;

use super::{CmsError, ContentQuery};
use crate::core::config::SiteConfig;

/// Anything that can answer a [`ContentQuery`] with the raw JSON envelope.
///
/// The app talks to the CMS through [`CmsClient`]; tests substitute an
/// in-memory source. Futures are not required to be `Send` because browser
/// fetches never are.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    async fn fetch(&self, query: &ContentQuery) -> Result<Value, CmsError>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    async fn fetch(&self, query: &ContentQuery) -> Result<Value, CmsError> {
        (**self).fetch(query).await
    }
}

/// HTTP client for the CMS REST API.
#[derive(Debug, Clone)]
pub struct CmsClient {
    client: reqwest::Client,
    api_base: String,
}

impl CmsClient {
    pub fn new(config: &SiteConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, config: &SiteConfig) -> Self {
        Self {
            client,
            api_base: config.api_base(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl ContentSource for CmsClient {
    async fn fetch(&self, query: &ContentQuery) -> Result<Value, CmsError> {
        let url = query.url(&self.api_base)?;
        debug!(%url, "fetching CMS content");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| CmsError::Request {
                endpoint: query.endpoint.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status {
                endpoint: query.endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| CmsError::Decode {
                endpoint: query.endpoint.to_string(),
                message: err.to_string(),
            })
    }
}
