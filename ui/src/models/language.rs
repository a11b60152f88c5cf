use serde::{Deserialize, Serialize};

use super::{nullable, RecordMeta};

/// A language configured in the CMS. Drives the switcher and the `locale`
/// parameter of every content request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Language {
    pub id: u64,
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    /// Display code such as `EN` or `AR`.
    #[serde(default, deserialize_with = "nullable")]
    pub code: String,
    #[serde(default, deserialize_with = "nullable")]
    pub flag_emoji: String,
    /// Locale tag sent to the CMS (`en`, `ar`). Stored as `local` in the CMS schema.
    #[serde(
        default,
        rename = "local",
        alias = "locale",
        deserialize_with = "nullable"
    )]
    pub locale_tag: String,
    #[serde(default, deserialize_with = "nullable")]
    pub is_default: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_cms_field_names() {
        let lang: Language = serde_json::from_value(json!({
            "id": 2,
            "name": "العربية",
            "code": "AR",
            "flag_emoji": "🇸🇦",
            "local": "ar",
            "is_default": false,
            "is_active": true,
            "order": 2
        }))
        .unwrap();
        assert_eq!(lang.locale_tag, "ar");
        assert!(lang.is_active);
    }

    #[test]
    fn accepts_locale_alias() {
        let lang: Language =
            serde_json::from_value(json!({ "id": 1, "code": "EN", "locale": "en" })).unwrap();
        assert_eq!(lang.locale_tag, "en");
        assert!(!lang.is_active);
    }
}
