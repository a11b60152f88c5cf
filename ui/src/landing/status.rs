use dioxus::prelude::*;

use crate::locale::ActiveLocale;
use crate::t;

/// Line under the spinner: names the target language while switching.
pub fn loading_message(current: &ActiveLocale) -> String {
    if current.is_fallback_language() {
        t!("loading-fetching")
    } else {
        t!("loading-switching", code = current.code.clone())
    }
}

#[component]
pub fn LoadingScreen(message: String) -> Element {
    rsx! {
        div { class: "status-screen", role: "status", aria_live: "polite",
            div { class: "status-screen__spinner", aria_hidden: "true" }
            div { class: "status-screen__title", {t!("loading-title")} }
            div { class: "status-screen__detail", "{message}" }
        }
    }
}

#[component]
pub fn ErrorScreen(message: String, on_reload: EventHandler<()>) -> Element {
    rsx! {
        div { class: "status-screen status-screen--error", role: "alert",
            div { class: "status-screen__icon", aria_hidden: "true", "⚠️" }
            div { class: "status-screen__title", {t!("error-title")} }
            div { class: "status-screen__detail", "{message}" }
            button {
                class: "button button--primary",
                onclick: move |_| on_reload.call(()),
                {t!("error-reload")}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_line_names_non_default_language() {
        crate::i18n::init();
        let arabic = ActiveLocale {
            code: "AR".into(),
            tag: "ar".into(),
        };
        assert!(loading_message(&arabic).contains("AR"));
        assert!(!loading_message(&ActiveLocale::fallback()).contains("EN"));
    }
}
