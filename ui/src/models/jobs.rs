use serde::{Deserialize, Serialize};

use super::{nullable, Media, RecordMeta, RichText};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, rename = "Icon")]
    pub icon: Option<Media>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JobListing {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub company: String,
    #[serde(default, deserialize_with = "nullable")]
    pub location: String,
    #[serde(default)]
    pub salary: Option<String>,
    /// full-time, part-time, contract, ...
    #[serde(default, rename = "type", deserialize_with = "nullable")]
    pub job_type: String,
    #[serde(default)]
    pub description: Option<RichText>,
    #[serde(default)]
    pub requirements: Option<RichText>,
}
