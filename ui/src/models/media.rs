use serde::{Deserialize, Serialize};

use super::nullable;
use crate::core::config::SiteConfig;

/// An uploaded file (logo, icon, photo) embedded via `populate`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Media {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "alternativeText")]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Media {
    /// Absolute source URL, or `None` when the upload has no usable path.
    pub fn src(&self, config: &SiteConfig) -> Option<String> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| config.media_url(url))
    }

    /// Alternative text, falling back to `fallback` when the editor left it blank.
    pub fn alt_or(&self, fallback: &str) -> String {
        self.alternative_text
            .as_deref()
            .map(str::trim)
            .filter(|alt| !alt.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}
