use crate::core::config::SiteConfig;
use crate::hooks::use_navigation;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet, shared by the app navbar and the landing nav.
pub(crate) const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
pub(crate) const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform-built router links.
///
/// `ui` does not know each platform's `Route` enum, so platforms register
/// one closure per internal page. Each receives the localized label and
/// returns a `Link` whose only child is that label.
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     jobs: |label| rsx!( Link { class: "navbar__link", to: Route::Jobs {}, "{label}" } ),
/// });
/// ```
///
/// CMS navigation items are plain anchors and need no builder.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub jobs: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Link to the landing page built by the registered [`NavBuilder`], or a plain anchor.
pub(crate) fn home_link(label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.home)(label),
        None => rsx! { a { class: "navbar__link", href: "/", "{label}" } },
    }
}

pub(crate) fn jobs_link(label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.jobs)(label),
        None => rsx! { a { class: "navbar__link", href: "/jobs", "{label}" } },
    }
}

/// Header for secondary pages: CMS site name and logo, CMS navigation items.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    let config = use_context::<SiteConfig>();
    let navigation = use_navigation();

    // Re-render when the page switches the chrome language.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let data = navigation.data();
    let site_name = data.site_name(&config.brand).to_string();
    let logo = data
        .settings
        .as_ref()
        .and_then(|settings| settings.logo.as_ref())
        .and_then(|logo| logo.src(&config).map(|src| (src, logo.alt_or(&site_name))));
    let items = navigation.items();

    let home = home_link(&t!("nav-home"));
    let jobs = jobs_link(&t!("nav-jobs"));

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    if let Some((src, alt)) = logo {
                        img { class: "navbar__logo", src: "{src}", alt: "{alt}" }
                    }
                    span { class: "navbar__brand-mark", "{site_name}" }
                }

                nav { class: "navbar__links",
                    {home}
                    {jobs}
                    if navigation.loading() {
                        span { class: "navbar__status", {t!("nav-loading")} }
                    }
                    for item in items {
                        a {
                            key: "{item.id}",
                            class: "navbar__link",
                            href: "{item.href()}",
                            "{item.title}"
                        }
                    }
                    {children}
                }

                if let Some(message) = navigation.error() {
                    div { class: "navbar__error",
                        span { "{message}" }
                        button {
                            class: "button button--ghost",
                            onclick: move |_| navigation.refetch(),
                            {t!("nav-retry")}
                        }
                    }
                }
            }
        }
    }
}
