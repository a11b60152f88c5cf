//! Read-only copies of CMS records.
//!
//! Field names follow the CMS schema (`main_heading`, `isActive`, `Icon`,
//! ...). Everything except `id` is optional on the wire: missing or `null`
//! values decode to empty defaults and the views substitute placeholders.

mod content;
mod jobs;
mod language;
mod media;
mod navigation;
mod rich_text;

pub use content::{
    CallToAction, CompanyLogo, Faq, Feature, HeroSection, OfferingsSection, Package,
    PackageFeature, ProcessStep, ServicePoint, ServiceSection, Testimonial,
};
pub use jobs::{Category, JobListing};
pub use language::Language;
pub use media::Media;
pub use navigation::{NavigationItem, SiteSettings};
pub use rich_text::{extract_text, Block, Inline, RichText};

use serde::{Deserialize, Deserializer, Serialize};

/// Bookkeeping the CMS attaches to every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMeta {
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// `null` decodes like an absent field. The CMS emits `null` for every
/// empty optional attribute, which plain `#[serde(default)]` rejects.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
