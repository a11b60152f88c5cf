use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::cms::CmsClient;
use crate::core::config::SiteConfig;
use crate::core::storage::platform_store;
use crate::core::Section;
use crate::i18n;
use crate::landing::{
    loading_message, CallToActionBar, ContactBlock, ErrorScreen, FaqBlock, FeatureList,
    HeroBanner, LandingNav, LandingView, LoadingScreen, OfferingsBlock, ProcessBlock,
    ServicesBlock, TestimonialsBlock, TrustedBy,
};
use crate::models::Language;
use crate::page::{bootstrap_page, change_language, PageAction, PageCell, PageState};

/// Work that needs the CMS. Handled one at a time so switches never interleave.
#[derive(Debug, Clone)]
enum PageEvent {
    Reload,
    SelectLanguage(Language),
}

/// Point the chrome strings (and anything watching the language signal) at
/// the locale the content is now in.
fn sync_chrome_language(state: Signal<PageState>, lang_code: Option<Signal<String>>) {
    let tag = state.peek().current.tag.clone();
    i18n::follow_content_locale(&tag);
    if let Some(mut code) = lang_code {
        if *code.peek() != tag {
            code.set(tag);
        }
    }
}

#[component]
pub fn Home() -> Element {
    let client = use_context::<CmsClient>();
    let config = use_context::<SiteConfig>();
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut state = use_signal(PageState::default);

    let events = use_coroutine(move |mut rx: UnboundedReceiver<PageEvent>| {
        let client = client.clone();
        async move {
            let store = platform_store();
            let mut cell = state;

            bootstrap_page(&client, &store, &mut cell).await;
            sync_chrome_language(state, lang_code);

            while let Some(event) = rx.next().await {
                match event {
                    PageEvent::Reload => bootstrap_page(&client, &store, &mut cell).await,
                    PageEvent::SelectLanguage(language) => {
                        change_language(&client, &store, &mut cell, &language).await
                    }
                }
                sync_chrome_language(state, lang_code);
            }
        }
    });

    let page = state();

    if page.loading {
        return rsx! {
            LoadingScreen { message: loading_message(&page.current) }
        };
    }

    if let Some(err) = page.error.as_ref() {
        return rsx! {
            ErrorScreen {
                message: err.to_string(),
                on_reload: move |_| events.send(PageEvent::Reload),
            }
        };
    }

    let view = LandingView::build(&page.content, &page.ui, &config);
    let sections = view.rendered_sections();

    rsx! {
        div {
            class: "landing",
            dir: view.direction,
            lang: "{view.locale}",
            "data-degraded": "{view.degraded}",

            LandingNav {
                brand: config.brand.clone(),
                sections,
                languages: page.languages.clone(),
                current_code: page.current.code.clone(),
                menu_open: page.ui.language_menu_open,
                loading: page.loading,
                on_toggle_menu: move |_| state.dispatch(PageAction::ToggleLanguageMenu),
                on_close_menu: move |_| state.dispatch(PageAction::CloseLanguageMenu),
                on_select: move |language: Language| events.send(PageEvent::SelectLanguage(language)),
            }

            main { class: "landing__content",
                if let Section::Shown(hero) = view.hero {
                    HeroBanner { hero }
                }
                if let Section::Shown(features) = view.features {
                    FeatureList { features }
                }
                if let Section::Shown(cta) = view.call_to_action {
                    CallToActionBar { cta }
                }
                if let Section::Shown(services) = view.services {
                    ServicesBlock { services }
                }
                if let Section::Shown(steps) = view.process {
                    ProcessBlock { steps }
                }
                OfferingsBlock {
                    offerings: view.offerings,
                    on_select: move |kind| state.dispatch(PageAction::SelectPackageType(kind)),
                }
                TestimonialsBlock { testimonials: view.testimonials }
                FaqBlock {
                    faqs: view.faqs,
                    on_toggle: move |id| state.dispatch(PageAction::ToggleFaq(id)),
                }
                if let Section::Shown(logos) = view.trusted_by {
                    TrustedBy { logos }
                }
                ContactBlock { contact: view.contact }
            }
        }
    }
}
