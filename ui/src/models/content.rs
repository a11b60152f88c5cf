//! Landing-page content types.

use serde::{Deserialize, Serialize};

use super::{nullable, Media, RecordMeta, RichText};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeroSection {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub main_heading: String,
    #[serde(default, deserialize_with = "nullable")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Feature {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CallToAction {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub button_text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub button_link: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CompanyLogo {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default)]
    pub logo: Option<Media>,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceSection {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub subtitle: String,
    #[serde(default)]
    pub description: Option<RichText>,
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServicePoint {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default)]
    pub description: Option<RichText>,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProcessStep {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub step_number: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OfferingsSection {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub subtitle: String,
}

/// A pricing package. `type` is `Flex` or `Fixed-Price`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Package {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, rename = "type", deserialize_with = "nullable")]
    pub package_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub price: String,
    #[serde(default)]
    pub description: Option<RichText>,
    #[serde(default, deserialize_with = "nullable")]
    pub button_text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub button_link: String,
    #[serde(default, deserialize_with = "nullable")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PackageFeature {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub feature_text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub package_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Testimonial {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub company: String,
    #[serde(default)]
    pub content: Option<RichText>,
    #[serde(default)]
    pub profile_image: Option<Media>,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Faq {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub question: String,
    #[serde(default)]
    pub answer: Option<RichText>,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i64,
}
