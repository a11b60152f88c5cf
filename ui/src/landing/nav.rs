use dioxus::prelude::*;

use crate::components::app_navbar::{jobs_link, NAVBAR_CSS, NAVBAR_CSS_INLINE};
use crate::components::LanguageSwitcher;
use crate::models::Language;
use crate::t;

/// Fixed landing header: brand, anchors for the rendered sections, jobs link
/// and the language switcher.
#[component]
pub fn LandingNav(
    brand: String,
    sections: Vec<&'static str>,
    languages: Vec<Language>,
    current_code: String,
    menu_open: bool,
    loading: bool,
    on_toggle_menu: EventHandler<()>,
    on_close_menu: EventHandler<()>,
    on_select: EventHandler<Language>,
) -> Element {
    let anchors: Vec<(String, String)> = std::iter::once(("#".to_string(), t!("nav-home")))
        .chain(sections.iter().filter_map(|&id| {
            anchor_label(id).map(|label| (format!("#{id}"), label))
        }))
        .collect();
    let jobs = jobs_link(&t!("nav-jobs"));

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { class: "navbar navbar--fixed",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "{brand}" }
                }
                nav { class: "navbar__links",
                    for (href, label) in anchors {
                        a { key: "{href}", class: "navbar__link", href: "{href}", "{label}" }
                    }
                    {jobs}
                }
                LanguageSwitcher {
                    languages,
                    current_code,
                    open: menu_open,
                    disabled: loading,
                    on_toggle: on_toggle_menu,
                    on_close: on_close_menu,
                    on_select,
                }
            }
        }
    }
}

fn anchor_label(id: &str) -> Option<String> {
    let label = match id {
        "features" => t!("nav-features"),
        "services" => t!("nav-services"),
        "process" => t!("nav-process"),
        "packages" => t!("nav-packages"),
        "testimonials" => t!("nav-testimonials"),
        "faqs" => t!("nav-faqs"),
        "trusted-by" => t!("nav-trusted-by"),
        "contact" => t!("nav-contact"),
        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_anchor_has_a_label() {
        crate::i18n::init();
        for id in [
            "features",
            "services",
            "process",
            "packages",
            "testimonials",
            "faqs",
            "trusted-by",
            "contact",
        ] {
            assert!(anchor_label(id).is_some(), "no nav label for #{id}");
        }
        assert_eq!(anchor_label("hero"), None);
    }
}
