use url::Url;

use super::CmsError;

/// One request against a CMS collection or single type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    pub endpoint: &'static str,
    pub populate: Option<&'static str>,
    pub sort: Option<&'static str>,
    pub locale: Option<String>,
}

impl ContentQuery {
    pub const fn new(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            populate: None,
            sort: None,
            locale: None,
        }
    }

    /// Expand an embedded media or relation field (e.g. `logo`).
    pub fn populate(mut self, field: &'static str) -> Self {
        self.populate = Some(field);
        self
    }

    /// `field:direction`, e.g. `order:asc`.
    pub fn sort(mut self, directive: &'static str) -> Self {
        self.sort = Some(directive);
        self
    }

    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = Some(tag.into());
        self
    }

    /// `{api_base}/{endpoint}?populate=..&sort=..&locale=..`, omitting unset directives.
    pub fn url(&self, api_base: &str) -> Result<Url, CmsError> {
        let raw = format!("{}/{}", api_base.trim_end_matches('/'), self.endpoint);
        let mut url = Url::parse(&raw).map_err(|err| CmsError::InvalidUrl {
            url: raw.clone(),
            message: err.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(CmsError::InvalidUrl {
                url: raw,
                message: "not a hierarchical URL".to_string(),
            });
        }

        if let Some(tag) = self.locale.as_deref() {
            if !is_valid_locale_tag(tag) {
                return Err(CmsError::InvalidLocale(tag.to_string()));
            }
        }

        let pairs: Vec<(&str, &str)> = [
            ("populate", self.populate),
            ("sort", self.sort),
            ("locale", self.locale.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect();

        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }
}

fn is_valid_locale_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
