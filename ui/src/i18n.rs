//! Localized chrome strings for `itgrate-ui`.
//!
//! CMS content arrives already localized; this module covers everything
//! the site prints itself (loading and error screens, section headings,
//! empty-state prompts, buttons). Bundles are embedded Fluent files:
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/itgrate-ui.ftl   (fallback/reference)
//!   ar/itgrate-ui.ftl
//! ```
//!
//! The chrome follows the CMS locale: after every content load the page
//! calls [`follow_content_locale`] with the locale tag it just loaded.
//! Tags the bundles do not cover (say `fr`) fall back to `en-US`.
//!
//! To add a locale, copy `en-US/itgrate-ui.ftl` to `i18n/<tag>/itgrate-ui.ftl`,
//! translate the values and register the file in the completeness tests.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routed through the shared [`LOADER`].
///
/// ```ignore
/// t!("nav-home")
/// t!("loading-switching", code = "AR")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the bundle file in every locale is `{DOMAIN}.ftl`.
const DOMAIN: &str = "itgrate-ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the platform's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(error = %err, "selecting chrome languages failed; using fallback");
        }
    });
}

/// Switch chrome language. Unparsable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Match the chrome to a CMS locale tag. Failures only cost translations.
pub fn follow_content_locale(tag: &str) {
    init();
    match set_language(tag) {
        Ok(()) => debug!(locale = tag, "chrome language follows content"),
        Err(err) => warn!(locale = tag, error = %err, "could not switch chrome language"),
    }
}

/// Embedded language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
