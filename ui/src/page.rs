//! Landing page state: one value replaced through [`PageState::apply`].
//!
//! The async flows at the bottom drive the state through a [`PageCell`], so
//! the same code runs against a Dioxus signal in the app and a plain value
//! in tests.

use dioxus::prelude::*;
use thiserror::Error;
use tracing::error;

use crate::cms::ContentSource;
use crate::content::PageContent;
use crate::core::storage::PreferenceStore;
use crate::locale::{self, ActiveLocale, Bootstrap};
use crate::models::Language;

/// Which pricing model the offerings section shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PackageType {
    #[default]
    Flex,
    FixedPrice,
}

impl PackageType {
    pub const ALL: [Self; 2] = [Self::Flex, Self::FixedPrice];

    /// The value stored in the CMS `type` / `package_type` fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flex => "Flex",
            Self::FixedPrice => "Fixed-Price",
        }
    }

    pub fn matches(self, value: &str) -> bool {
        value.trim() == self.as_str()
    }
}

/// Toggles owned by the page, independent of CMS content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub expanded_faq: Option<u64>,
    pub package_type: PackageType,
    pub language_menu_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("{0}")]
    Startup(String),
    #[error("Failed to load content in selected language")]
    LanguageSwitch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub loading: bool,
    pub error: Option<PageError>,
    /// Active languages, ordered.
    pub languages: Vec<Language>,
    pub current: ActiveLocale,
    pub content: PageContent,
    pub ui: UiState,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            languages: Vec::new(),
            current: ActiveLocale::fallback(),
            content: PageContent::default(),
            ui: UiState::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    LoadStarted,
    Bootstrapped(Bootstrap),
    ContentLoaded(PageContent),
    LoadFailed(PageError),
    LoadFinished,
    ToggleFaq(u64),
    SelectPackageType(PackageType),
    ToggleLanguageMenu,
    CloseLanguageMenu,
}

impl PageState {
    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::LoadStarted => {
                self.loading = true;
                self.error = None;
            }
            PageAction::Bootstrapped(boot) => {
                self.languages = boot.languages;
                self.current = boot.current;
                self.content = boot.content;
            }
            PageAction::ContentLoaded(content) => {
                self.ui.expanded_faq = None;
                self.content = content;
            }
            PageAction::LoadFailed(err) => self.error = Some(err),
            PageAction::LoadFinished => self.loading = false,
            PageAction::ToggleFaq(id) => {
                self.ui.expanded_faq = match self.ui.expanded_faq {
                    Some(open) if open == id => None,
                    _ => Some(id),
                };
            }
            PageAction::SelectPackageType(kind) => self.ui.package_type = kind,
            PageAction::ToggleLanguageMenu => {
                self.ui.language_menu_open = !self.ui.language_menu_open;
            }
            PageAction::CloseLanguageMenu => self.ui.language_menu_open = false,
        }
    }

    /// Start switching to `language`. Picking the language already shown
    /// only closes the menu and returns `None`.
    pub fn begin_language_change(&mut self, language: &Language) -> Option<ActiveLocale> {
        self.ui.language_menu_open = false;
        if self.current.code == language.code {
            return None;
        }

        let next = ActiveLocale::of(language);
        self.loading = true;
        self.current = next.clone();
        Some(next)
    }

    /// The CMS record for the active language, when the CMS offers one.
    pub fn current_language(&self) -> Option<&Language> {
        self.languages
            .iter()
            .find(|lang| lang.code == self.current.code)
    }
}

/// Somewhere a [`PageState`] lives.
pub trait PageCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut PageState) -> R) -> R;

    fn dispatch(&mut self, action: PageAction) {
        self.update(|state| state.apply(action));
    }
}

impl PageCell for PageState {
    fn update<R>(&mut self, f: impl FnOnce(&mut PageState) -> R) -> R {
        f(self)
    }
}

impl PageCell for Signal<PageState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut PageState) -> R) -> R {
        self.with_mut(f)
    }
}

/// First load: resolve the language, fetch its content, clear `loading`.
pub async fn bootstrap_page<S, P, C>(source: &S, store: &P, cell: &mut C)
where
    S: ContentSource,
    P: PreferenceStore,
    C: PageCell,
{
    cell.dispatch(PageAction::LoadStarted);
    match locale::bootstrap(source, store).await {
        Ok(boot) => cell.dispatch(PageAction::Bootstrapped(boot)),
        Err(err) => {
            error!(error = %err, "page failed to load");
            cell.dispatch(PageAction::LoadFailed(PageError::Startup(err.to_string())));
        }
    }
    cell.dispatch(PageAction::LoadFinished);
}

/// Explicit language selection from the switcher.
pub async fn change_language<S, P, C>(source: &S, store: &P, cell: &mut C, language: &Language)
where
    S: ContentSource,
    P: PreferenceStore,
    C: PageCell,
{
    if cell.update(|state| state.begin_language_change(language)).is_none() {
        return;
    }

    match locale::switch_language(source, store, language).await {
        Ok(content) => cell.dispatch(PageAction::ContentLoaded(content)),
        Err(err) => {
            error!(code = %language.code, error = %err, "language switch failed");
            cell.dispatch(PageAction::LoadFailed(PageError::LanguageSwitch));
        }
    }
    cell.dispatch(PageAction::LoadFinished);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::{CmsError, StaticSource};
    use crate::core::storage::{MemoryStore, PREFERRED_LANGUAGE_KEY};
    use crate::models::RecordMeta;
    use futures::executor::block_on;
    use serde_json::json;

    fn language(code: &str, tag: &str) -> Language {
        Language {
            id: 1,
            meta: RecordMeta::default(),
            name: code.into(),
            code: code.into(),
            flag_emoji: String::new(),
            locale_tag: tag.into(),
            is_default: false,
            is_active: true,
            order: 1,
        }
    }

    /// Records every state the flow passes through.
    #[derive(Default)]
    struct Recorder {
        state: PageState,
        loading_history: Vec<bool>,
    }

    impl PageCell for Recorder {
        fn update<R>(&mut self, f: impl FnOnce(&mut PageState) -> R) -> R {
            let out = f(&mut self.state);
            self.loading_history.push(self.state.loading);
            out
        }
    }

    #[test]
    fn faq_toggles_open_and_closed() {
        let mut state = PageState::default();
        state.apply(PageAction::ToggleFaq(3));
        assert_eq!(state.ui.expanded_faq, Some(3));
        state.apply(PageAction::ToggleFaq(4));
        assert_eq!(state.ui.expanded_faq, Some(4));
        state.apply(PageAction::ToggleFaq(4));
        assert_eq!(state.ui.expanded_faq, None);
    }

    #[test]
    fn package_type_defaults_to_flex() {
        let mut state = PageState::default();
        assert_eq!(state.ui.package_type, PackageType::Flex);
        state.apply(PageAction::SelectPackageType(PackageType::FixedPrice));
        assert_eq!(state.ui.package_type.as_str(), "Fixed-Price");
        assert!(PackageType::FixedPrice.matches(" Fixed-Price"));
    }

    #[test]
    fn bootstrap_clears_loading_and_sets_locale() {
        let source = StaticSource::new().with_data(
            "languages",
            json!([{ "id": 2, "code": "AR", "local": "ar", "is_default": true, "is_active": true }]),
        );
        let mut state = PageState::default();
        block_on(bootstrap_page(&source, &MemoryStore::default(), &mut state));

        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.current.tag, "ar");
        assert_eq!(state.current_language().map(|l| l.id), Some(2));
    }

    #[test]
    fn bootstrap_failure_shows_error() {
        let source = StaticSource::new().with_error(
            "languages",
            CmsError::InvalidUrl {
                url: "::".into(),
                message: "relative URL without a base".into(),
            },
        );
        let mut state = PageState::default();
        block_on(bootstrap_page(&source, &MemoryStore::default(), &mut state));

        assert!(!state.loading);
        assert!(matches!(state.error, Some(PageError::Startup(_))));
    }

    #[test]
    fn selecting_current_language_is_a_no_op() {
        let source = StaticSource::new();
        let mut cell = Recorder::default();
        cell.state.loading = false;
        cell.state.ui.language_menu_open = true;

        block_on(change_language(
            &source,
            &MemoryStore::default(),
            &mut cell,
            &language("EN", "en"),
        ));

        assert_eq!(source.request_count(), 0);
        assert!(!cell.state.ui.language_menu_open);
        assert!(cell.loading_history.iter().all(|loading| !loading));
    }

    #[test]
    fn switching_loads_new_locale_and_saves_preference() {
        let source = StaticSource::new().with_data("faqs", json!([{ "id": 7, "question": "كيف؟" }]));
        let store = MemoryStore::default();
        let mut cell = Recorder::default();
        cell.state.loading = false;
        cell.state.ui.expanded_faq = Some(1);

        block_on(change_language(&source, &store, &mut cell, &language("AR", "ar")));

        assert_eq!(cell.loading_history.first(), Some(&true));
        assert!(!cell.state.loading);
        assert_eq!(cell.state.current.code, "AR");
        assert_eq!(cell.state.content.locale, "ar");
        assert_eq!(cell.state.content.faqs.len(), 1);
        assert_eq!(cell.state.ui.expanded_faq, None);
        assert!(store.read(PREFERRED_LANGUAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn failed_switch_sets_message_and_clears_loading() {
        let store = MemoryStore::default();
        let mut state = PageState {
            loading: false,
            ..PageState::default()
        };

        block_on(change_language(
            &StaticSource::new(),
            &store,
            &mut state,
            &language("XX", "x x"),
        ));

        assert!(!state.loading);
        assert_eq!(
            state.error.as_ref().map(ToString::to_string).as_deref(),
            Some("Failed to load content in selected language")
        );
        assert_eq!(store.read(PREFERRED_LANGUAGE_KEY).unwrap(), None);
    }
}
