use tracing::{debug, info, warn};

use super::{load_preference, save_preference, ActiveLocale, StoredLanguage};
use crate::cms::{envelope, ContentSource};
use crate::content::{load_page_content, ContentKind, LoadError, PageContent};
use crate::core::storage::PreferenceStore;
use crate::models::Language;

/// One link of the fallback chain, tried in [`LocaleStrategy::RESOLUTION_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleStrategy {
    /// The visitor's saved choice, if the CMS still offers that code.
    Persisted,
    /// The language flagged `is_default`.
    FlaggedDefault,
    /// The first active language by `order`.
    FirstActive,
}

impl LocaleStrategy {
    pub const RESOLUTION_ORDER: [Self; 3] = [Self::Persisted, Self::FlaggedDefault, Self::FirstActive];

    pub fn pick<'a>(
        self,
        active: &'a [Language],
        preference: Option<&StoredLanguage>,
    ) -> Option<&'a Language> {
        match self {
            Self::Persisted => {
                let stored = preference?;
                active.iter().find(|lang| lang.code == stored.code)
            }
            Self::FlaggedDefault => active.iter().find(|lang| lang.is_default),
            Self::FirstActive => active.first(),
        }
    }
}

/// Active languages only, ordered by `order`. Ties keep CMS order.
pub fn active_languages(languages: Vec<Language>) -> Vec<Language> {
    let mut active: Vec<Language> = languages.into_iter().filter(|l| l.is_active).collect();
    active.sort_by_key(|lang| lang.order);
    active
}

/// Walk the fallback chain over `active`. `None` means the built-in default applies.
pub fn resolve_language<'a>(
    active: &'a [Language],
    preference: Option<&StoredLanguage>,
) -> Option<(LocaleStrategy, &'a Language)> {
    LocaleStrategy::RESOLUTION_ORDER
        .into_iter()
        .find_map(|strategy| strategy.pick(active, preference).map(|lang| (strategy, lang)))
}

pub fn resolve_locale(active: &[Language], preference: Option<&StoredLanguage>) -> ActiveLocale {
    match resolve_language(active, preference) {
        Some((strategy, language)) => {
            debug!(?strategy, code = %language.code, "resolved language");
            ActiveLocale::of(language)
        }
        None => {
            debug!("no usable CMS language; using built-in default");
            ActiveLocale::fallback()
        }
    }
}

/// The active CMS languages. A recoverable failure leaves the list empty.
pub async fn fetch_languages<S: ContentSource>(source: &S) -> Result<Vec<Language>, LoadError> {
    let query = ContentKind::Languages.query();
    match source.fetch(&query).await {
        Ok(payload) => Ok(active_languages(envelope::records(&payload))),
        Err(err) if err.is_recoverable() => {
            warn!(error = %err, "languages unavailable; using built-in default");
            Ok(Vec::new())
        }
        Err(err) => Err(err.into()),
    }
}

/// Result of the first page load.
#[derive(Debug, Clone, PartialEq)]
pub struct Bootstrap {
    pub languages: Vec<Language>,
    pub current: ActiveLocale,
    pub content: PageContent,
}

/// Resolve the starting language and load its content.
pub async fn bootstrap<S, P>(source: &S, store: &P) -> Result<Bootstrap, LoadError>
where
    S: ContentSource,
    P: PreferenceStore,
{
    let languages = fetch_languages(source).await?;
    let preference = load_preference(store);
    let current = resolve_locale(&languages, preference.as_ref());
    info!(code = %current.code, locale = %current.tag, "starting page");

    let content = load_page_content(source, &current.tag).await?;
    Ok(Bootstrap {
        languages,
        current,
        content,
    })
}

/// Load `language`'s content and remember the choice once it loaded.
///
/// The preference is only written after a successful load, so a broken
/// locale is never restored on the next visit.
pub async fn switch_language<S, P>(
    source: &S,
    store: &P,
    language: &Language,
) -> Result<PageContent, LoadError>
where
    S: ContentSource,
    P: PreferenceStore,
{
    let locale = ActiveLocale::of(language);
    info!(code = %locale.code, locale = %locale.tag, "switching language");

    let content = load_page_content(source, &locale.tag).await?;
    if let Err(err) = save_preference(store, language) {
        warn!(error = %err, "could not save language preference");
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::{CmsError, StaticSource};
    use crate::core::storage::{MemoryStore, PREFERRED_LANGUAGE_KEY};
    use crate::models::RecordMeta;
    use futures::executor::block_on;
    use serde_json::json;

    fn language(id: u64, code: &str, tag: &str, order: i64) -> Language {
        Language {
            id,
            meta: RecordMeta::default(),
            name: code.to_string(),
            code: code.to_string(),
            flag_emoji: String::new(),
            locale_tag: tag.to_string(),
            is_default: false,
            is_active: true,
            order,
        }
    }

    fn stored(code: &str) -> StoredLanguage {
        StoredLanguage { code: code.into() }
    }

    fn languages_source() -> StaticSource {
        StaticSource::new().with_data(
            "languages",
            json!([
                { "id": 2, "name": "العربية", "code": "AR", "local": "ar", "is_active": true, "order": 2 },
                { "id": 1, "name": "English", "code": "EN", "local": "en", "is_default": true, "is_active": true, "order": 1 },
                { "id": 3, "name": "Français", "code": "FR", "local": "fr", "is_active": false, "order": 3 }
            ]),
        )
    }

    #[test]
    fn active_languages_filters_and_orders() {
        let mut hidden = language(9, "DE", "de", 0);
        hidden.is_active = false;
        let langs = vec![language(1, "B", "b", 2), hidden, language(2, "A", "a", 1), language(3, "C", "c", 2)];

        let codes: Vec<_> = active_languages(langs).into_iter().map(|l| l.code).collect();
        assert_eq!(codes, ["A", "B", "C"]);
    }

    #[test]
    fn persisted_preference_wins_when_still_offered() {
        let mut en = language(1, "EN", "en", 1);
        en.is_default = true;
        let langs = vec![en, language(2, "AR", "ar", 2)];

        let (strategy, picked) = resolve_language(&langs, Some(&stored("AR"))).unwrap();
        assert_eq!(strategy, LocaleStrategy::Persisted);
        assert_eq!(picked.locale_tag, "ar");
    }

    #[test]
    fn stale_preference_falls_through_to_flagged_default() {
        let mut ar = language(2, "AR", "ar", 2);
        ar.is_default = true;
        let langs = vec![language(1, "EN", "en", 1), ar];

        let (strategy, picked) = resolve_language(&langs, Some(&stored("FR"))).unwrap();
        assert_eq!(strategy, LocaleStrategy::FlaggedDefault);
        assert_eq!(picked.code, "AR");
    }

    #[test]
    fn first_active_when_nothing_is_flagged() {
        let langs = vec![language(4, "AR", "ar", 1), language(1, "EN", "en", 2)];
        let (strategy, picked) = resolve_language(&langs, None).unwrap();
        assert_eq!(strategy, LocaleStrategy::FirstActive);
        assert_eq!(picked.code, "AR");
    }

    #[test]
    fn empty_list_uses_built_in_default() {
        assert_eq!(resolve_locale(&[], Some(&stored("AR"))), ActiveLocale::fallback());
    }

    #[test]
    fn bootstrap_defaults_to_english_without_preference() {
        let source = languages_source();
        let store = MemoryStore::default();
        let boot = block_on(bootstrap(&source, &store)).unwrap();

        assert_eq!(boot.current.code, "EN");
        assert_eq!(boot.content.locale, "en");
        assert_eq!(boot.languages.len(), 2);
        assert_eq!(boot.languages[0].code, "EN");
        // Resolution alone never writes a preference.
        assert_eq!(store.read(PREFERRED_LANGUAGE_KEY).unwrap(), None);
    }

    #[test]
    fn bootstrap_restores_persisted_arabic() {
        let source = languages_source();
        let store = MemoryStore::with_entry(PREFERRED_LANGUAGE_KEY, r#"{"id":2,"code":"AR","local":"ar"}"#);
        let boot = block_on(bootstrap(&source, &store)).unwrap();

        assert_eq!(boot.current.tag, "ar");
        assert!(boot.current.is_rtl());
        let content_requests = source
            .requests()
            .into_iter()
            .filter(|q| q.endpoint != "languages")
            .collect::<Vec<_>>();
        assert!(content_requests.iter().all(|q| q.locale.as_deref() == Some("ar")));
    }

    #[test]
    fn bootstrap_ignores_malformed_preference() {
        let source = languages_source();
        let store = MemoryStore::with_entry(PREFERRED_LANGUAGE_KEY, "not json");
        let boot = block_on(bootstrap(&source, &store)).unwrap();
        assert_eq!(boot.current.code, "EN");
    }

    #[test]
    fn languages_failure_uses_hardcoded_default() {
        let source = StaticSource::new().with_error(
            "languages",
            CmsError::Request {
                endpoint: "languages".into(),
                message: "offline".into(),
            },
        );
        let boot = block_on(bootstrap(&source, &MemoryStore::default())).unwrap();

        assert!(boot.languages.is_empty());
        assert_eq!(boot.current, ActiveLocale::fallback());
        assert_eq!(boot.content.locale, "en");
    }

    #[test]
    fn languages_query_sorts_by_order() {
        let source = languages_source();
        block_on(fetch_languages(&source)).unwrap();
        let requests = source.requests();
        assert_eq!(requests[0].sort, Some("order:asc"));
        assert_eq!(requests[0].locale, None);
    }

    #[test]
    fn switch_saves_preference_only_after_success() {
        let store = MemoryStore::default();
        let arabic = language(2, "AR", "ar", 2);

        let content = block_on(switch_language(&StaticSource::new(), &store, &arabic)).unwrap();
        assert_eq!(content.locale, "ar");
        let saved = store.read(PREFERRED_LANGUAGE_KEY).unwrap().unwrap();
        assert!(saved.contains(r#""code":"AR""#));

        let broken = language(3, "XX", "x x", 3);
        let err = block_on(switch_language(&StaticSource::new(), &store, &broken));
        assert!(err.is_err());
        assert_eq!(store.read(PREFERRED_LANGUAGE_KEY).unwrap(), Some(saved));
    }
}
