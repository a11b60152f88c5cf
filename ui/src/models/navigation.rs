use serde::{Deserialize, Serialize};

use super::{nullable, Media, RecordMeta};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NavigationItem {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i64,
    #[serde(default, rename = "isActive", deserialize_with = "nullable")]
    pub is_active: bool,
}

impl NavigationItem {
    /// `url` when set, otherwise `/{slug}`.
    pub fn href(&self) -> String {
        let url = self.url.trim();
        if !url.is_empty() {
            url.to_string()
        } else if self.slug.trim().is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.slug.trim().trim_start_matches('/'))
        }
    }
}

/// Single type holding site-wide branding.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, rename = "siteName", deserialize_with = "nullable")]
    pub site_name: String,
    #[serde(default)]
    pub logo: Option<Media>,
}
