use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::cms::CmsClient;
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::SiteConfig;
use ui::views::{Home, Jobs};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[layout(WebNavbar)]
    #[route("/jobs")]
    Jobs {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_jobs(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Jobs {},
        "{label}"
    })
}

fn main() {
    // A second init (from launch) is harmless; keep the first.
    let _ = dioxus::logger::init(Level::INFO);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SiteConfig::from_env);
    use_context_provider(|| CmsClient::new(&config));

    // Chrome language marker; the landing page updates it after each content load.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    use_hook(|| {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            jobs: nav_jobs,
        });
        info!(cms = %config.cms_url, "itgrate web started");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
