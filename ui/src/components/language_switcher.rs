use dioxus::prelude::*;

use crate::models::Language;
use crate::t;

const GLOBE: &str = "🌐";

/// Flag for `code`, or a globe when the CMS has no such language or flag.
pub fn flag_for<'a>(languages: &'a [Language], code: &str) -> &'a str {
    languages
        .iter()
        .find(|lang| lang.code == code)
        .map(|lang| lang.flag_emoji.as_str())
        .filter(|flag| !flag.is_empty())
        .unwrap_or(GLOBE)
}

/// Dropdown of CMS languages. Hidden when the CMS offers none.
///
/// A transparent backdrop behind the open menu catches clicks outside it.
#[component]
pub fn LanguageSwitcher(
    languages: Vec<Language>,
    current_code: String,
    open: bool,
    disabled: bool,
    on_toggle: EventHandler<()>,
    on_close: EventHandler<()>,
    on_select: EventHandler<Language>,
) -> Element {
    if languages.is_empty() {
        return rsx! {};
    }

    let flag = flag_for(&languages, &current_code).to_string();
    let caret_class = if open {
        "language-switcher__caret language-switcher__caret--open"
    } else {
        "language-switcher__caret"
    };

    rsx! {
        div { class: "language-switcher",
            button {
                class: "language-switcher__toggle",
                disabled,
                aria_label: t!("nav-language-label"),
                aria_expanded: "{open}",
                onclick: move |_| on_toggle.call(()),
                span { class: "language-switcher__flag", "{flag}" }
                span { class: "language-switcher__code", "{current_code}" }
                span { class: caret_class, "▼" }
            }

            if open {
                div {
                    class: "language-switcher__backdrop",
                    onclick: move |_| on_close.call(()),
                }
                div { class: "language-switcher__menu", role: "menu",
                    for language in languages.iter().cloned() {
                        LanguageOption {
                            key: "{language.id}",
                            active: language.code == current_code,
                            disabled,
                            language,
                            on_select,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LanguageOption(
    language: Language,
    active: bool,
    disabled: bool,
    on_select: EventHandler<Language>,
) -> Element {
    let class = if active {
        "language-switcher__option language-switcher__option--active"
    } else {
        "language-switcher__option"
    };
    let flag = language.flag_emoji.clone();
    let name = language.name.clone();

    rsx! {
        button {
            class,
            role: "menuitem",
            disabled,
            onclick: move |_| on_select.call(language.clone()),
            span { class: "language-switcher__flag", "{flag}" }
            span { "{name}" }
            if active {
                span { class: "language-switcher__check", "✓" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordMeta;

    fn lang(code: &str, flag: &str) -> Language {
        Language {
            id: 1,
            meta: RecordMeta::default(),
            name: code.into(),
            code: code.into(),
            flag_emoji: flag.into(),
            locale_tag: code.to_lowercase(),
            is_default: false,
            is_active: true,
            order: 1,
        }
    }

    #[test]
    fn flag_falls_back_to_globe() {
        let langs = vec![lang("AR", "🇸🇦"), lang("FR", "")];
        assert_eq!(flag_for(&langs, "AR"), "🇸🇦");
        assert_eq!(flag_for(&langs, "FR"), GLOBE);
        assert_eq!(flag_for(&langs, "EN"), GLOBE);
    }
}
