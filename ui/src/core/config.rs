//! Site configuration resolved once at startup.
//!
//! The CMS location comes from `ITGRATE_CMS_URL`. Browser builds can only see
//! the value baked in at compile time; native builds also honour the variable
//! at runtime so a packaged desktop app can be pointed at another CMS.

/// Used when nothing else is configured (a local Strapi dev server).
pub const DEFAULT_CMS_URL: &str = "http://localhost:1337";

/// Language code used when the CMS has no languages configured.
pub const FALLBACK_LANGUAGE_CODE: &str = "EN";

/// Locale tag paired with [`FALLBACK_LANGUAGE_CODE`].
pub const FALLBACK_LOCALE: &str = "en";

const CMS_URL_VAR: &str = "ITGRATE_CMS_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Origin of the CMS, without a trailing slash (e.g. `http://localhost:1337`).
    pub cms_url: String,
    /// Brand shown when the CMS has no site settings.
    pub brand: String,
    pub contact_email: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        let cms_url = runtime_override()
            .or_else(|| option_env!("ITGRATE_CMS_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_CMS_URL.to_string());
        Self::with_cms_url(cms_url)
    }

    pub fn with_cms_url(url: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            cms_url: url.trim().trim_end_matches('/').to_string(),
            brand: "ITGrate".to_string(),
            contact_email: "contact@itgrate.com".to_string(),
        }
    }

    /// Root of the REST API, e.g. `http://localhost:1337/api`.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.cms_url)
    }

    /// Where editors add content; linked from empty sections.
    pub fn admin_url(&self) -> String {
        format!("{}/admin", self.cms_url)
    }

    /// Resolve a media path from the CMS. Uploads are usually served as
    /// `/uploads/...` relative to the CMS origin, but providers such as S3
    /// return absolute URLs which pass through unchanged.
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{path}", self.cms_url)
        } else {
            format!("{}/{path}", self.cms_url)
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::with_cms_url(DEFAULT_CMS_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_override() -> Option<String> {
    std::env::var(CMS_URL_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn runtime_override() -> Option<String> {
    let _ = CMS_URL_VAR;
    None
}
