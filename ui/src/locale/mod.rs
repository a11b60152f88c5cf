//! Locale resolution: which CMS language the page shows.
//!
//! The active language comes from an ordered fallback chain
//! ([`LocaleStrategy`]): the visitor's saved preference if the CMS still
//! offers it, then the language flagged as default, then the first active
//! language, and finally the built-in `EN` / `en`.

mod preference;
mod resolver;

pub use preference::{load_preference, save_preference, StoredLanguage};
pub use resolver::{
    active_languages, bootstrap, fetch_languages, resolve_language, resolve_locale,
    switch_language, Bootstrap, LocaleStrategy,
};

use crate::core::config::{FALLBACK_LANGUAGE_CODE, FALLBACK_LOCALE};
use crate::models::Language;

/// The language currently shown: its display code and the tag sent to the CMS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLocale {
    pub code: String,
    pub tag: String,
}

impl ActiveLocale {
    pub fn fallback() -> Self {
        Self {
            code: FALLBACK_LANGUAGE_CODE.to_string(),
            tag: FALLBACK_LOCALE.to_string(),
        }
    }

    /// A language without a locale tag falls back to its lowercased code,
    /// and one with neither to the built-in locale.
    pub fn of(language: &Language) -> Self {
        let tag = language.locale_tag.trim();
        let code = language.code.trim();
        let tag = if !tag.is_empty() {
            tag.to_string()
        } else if !code.is_empty() {
            code.to_lowercase()
        } else {
            FALLBACK_LOCALE.to_string()
        };
        Self {
            code: language.code.clone(),
            tag,
        }
    }

    pub fn is_fallback_language(&self) -> bool {
        self.code == FALLBACK_LANGUAGE_CODE
    }

    pub fn is_rtl(&self) -> bool {
        is_rtl(&self.tag)
    }

    pub fn direction(&self) -> &'static str {
        text_direction(&self.tag)
    }
}

/// Arabic content is laid out right-to-left.
pub fn is_rtl(tag: &str) -> bool {
    tag == "ar" || tag.starts_with("ar-")
}

/// The `dir` attribute value for content in `tag`.
pub fn text_direction(tag: &str) -> &'static str {
    if is_rtl(tag) {
        "rtl"
    } else {
        "ltr"
    }
}

impl Default for ActiveLocale {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordMeta;

    #[test]
    fn missing_tag_falls_back_to_lowercased_code() {
        let lang = Language {
            id: 1,
            meta: RecordMeta::default(),
            name: "Français".into(),
            code: "FR".into(),
            flag_emoji: String::new(),
            locale_tag: " ".into(),
            is_default: false,
            is_active: true,
            order: 1,
        };
        assert_eq!(ActiveLocale::of(&lang).tag, "fr");
    }

    #[test]
    fn blank_tag_and_code_use_built_in_locale() {
        let lang = Language {
            id: 4,
            meta: RecordMeta::default(),
            name: "Unnamed".into(),
            code: String::new(),
            flag_emoji: String::new(),
            locale_tag: String::new(),
            is_default: true,
            is_active: true,
            order: 1,
        };
        let locale = ActiveLocale::of(&lang);
        assert_eq!(locale.tag, FALLBACK_LOCALE);
        assert!(crate::content::ContentKind::Faqs
            .localized_query(&locale.tag)
            .url("http://cms.test/api")
            .is_ok());
    }

    #[test]
    fn only_arabic_is_rtl() {
        assert_eq!(text_direction("ar"), "rtl");
        assert_eq!(text_direction("ar-SA"), "rtl");
        assert_eq!(text_direction("en"), "ltr");
        assert_eq!(text_direction("arn"), "ltr");
        assert!(!ActiveLocale::fallback().is_rtl());
    }
}
