use dioxus::prelude::*;

use super::view::{ApiStatus, CategoryIcon, CategoryView, JobCard};
use crate::core::Section;
use crate::landing::AdminPrompt;
use crate::t;

#[component]
pub fn CategoryGrid(categories: Vec<CategoryView>) -> Element {
    rsx! {
        section { class: "jobs__section",
            h2 { class: "section__title", {t!("jobs-categories-title")} }
            div { class: "category-grid",
                for category in categories {
                    div { key: "{category.id}", class: "category",
                        div { class: "category__icon",
                            {match category.icon {
                                CategoryIcon::Image(image) => rsx! {
                                    img { src: "{image.src}", alt: "{image.alt}" }
                                },
                                CategoryIcon::Emoji(emoji) => rsx! {
                                    span { "{emoji}" }
                                },
                            }}
                        }
                        h3 { class: "category__name", "{category.name}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn JobListings(listings: Section<Vec<JobCard>>) -> Element {
    rsx! {
        section { class: "jobs__section",
            h2 { class: "section__title", {t!("jobs-listings-title")} }
            {match listings {
                Section::Shown(cards) => rsx! {
                    div { class: "job-grid",
                        for (id, card) in cards.into_iter().map(|card| (card.id, card)) {
                            JobCardView { key: "{id}", card }
                        }
                    }
                },
                Section::Empty { admin_url } => rsx! {
                    div { class: "jobs__empty",
                        span { class: "jobs__empty-icon", aria_hidden: "true", "💼" }
                        AdminPrompt { message: t!("jobs-empty"), admin_url }
                    }
                },
                Section::Hidden => rsx! {},
            }}
        }
    }
}

#[component]
fn JobCardView(card: JobCard) -> Element {
    rsx! {
        article { class: "job-card",
            div { class: "job-card__header",
                h3 { class: "job-card__title", "{card.title}" }
                span { class: "job-card__type", "{card.job_type}" }
            }
            ul { class: "job-card__facts",
                li { span { aria_hidden: "true", "🏢" } span { "{card.company}" } }
                li { span { aria_hidden: "true", "📍" } span { "{card.location}" } }
                if let Some(salary) = card.salary {
                    li { span { aria_hidden: "true", "💰" } span { "{salary}" } }
                }
            }
            p { class: "job-card__summary", "{card.summary}" }
            div { class: "job-card__footer",
                if let Some(date) = card.posted {
                    span { class: "job-card__posted", {t!("jobs-posted", date = date)} }
                }
                button { class: "button button--primary", {t!("jobs-apply")} }
            }
        }
    }
}

#[component]
pub fn ApiStatusPanel(status: ApiStatus) -> Element {
    let categories_icon = if status.categories_ok { "✅" } else { "⚠️" };
    let listings_icon = if status.listings_ok { "💼" } else { "⚠️" };

    rsx! {
        section { class: "api-status",
            h3 { {t!("jobs-status-title")} }
            div { class: "api-status__grid",
                div { class: "api-status__item api-status__item--categories",
                    span { "{categories_icon}" }
                    span { class: "api-status__name", {t!("jobs-status-categories")} }
                    p { {t!("jobs-status-categories-count", count = status.categories)} }
                }
                div { class: "api-status__item api-status__item--listings",
                    span { "{listings_icon}" }
                    span { class: "api-status__name", {t!("jobs-status-listings")} }
                    p { {t!("jobs-status-listings-count", count = status.listings)} }
                }
            }
        }
    }
}
