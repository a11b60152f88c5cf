use dioxus::prelude::*;

use crate::cms::CmsClient;
use crate::content::load_job_board;
use crate::core::config::SiteConfig;
use crate::jobs::{ApiStatusPanel, CategoryGrid, JobBoardView, JobListings};
use crate::landing::ErrorScreen;
use crate::t;

#[component]
pub fn Jobs() -> Element {
    let client = use_context::<CmsClient>();
    let config = use_context::<SiteConfig>();

    // Re-render with the chrome language picked on the landing page.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut board = use_resource(move || {
        let client = client.clone();
        async move { load_job_board(&client).await }
    });

    let body = match &*board.read() {
        None => rsx! {
            div { class: "jobs__loading", role: "status", {t!("loading-title")} }
        },
        Some(Err(err)) => rsx! {
            ErrorScreen { message: err.to_string(), on_reload: move |_| board.restart() }
        },
        Some(Ok(content)) => {
            let view = JobBoardView::build(content, &config);
            rsx! {
                CategoryGrid { categories: view.categories }
                JobListings { listings: view.listings }
                ApiStatusPanel { status: view.status }
            }
        }
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-jobs",
            header { class: "jobs__header",
                h1 { {t!("jobs-title")} }
                p { {t!("jobs-tagline")} }
            }
            {body}
        }
    }
}
