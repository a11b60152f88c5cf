use thiserror::Error;

/// Errors from the CMS access layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CmsError {
    /// The HTTP request itself failed (network, DNS, CORS, TLS).
    #[error("request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    /// The CMS answered with a non-2xx status code.
    #[error("CMS returned HTTP {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// The body was not JSON.
    #[error("could not decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },

    /// The configured CMS location cannot form a URL.
    #[error("invalid CMS URL `{url}`: {message}")]
    InvalidUrl { url: String, message: String },

    /// A locale tag that cannot be sent as a query parameter.
    #[error("invalid locale tag `{0}`")]
    InvalidLocale(String),
}

impl CmsError {
    /// Failures of a single request. The page renders without that content
    /// type instead of failing; every other variant is a setup problem that
    /// affects the whole batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Request { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }
}
