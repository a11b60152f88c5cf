use dioxus::prelude::*;

use super::view::{
    Avatar, ContactView, FaqView, FeatureView, HeroView, LinkView, LogoView, OfferingsView,
    ServicesView, StepView, TestimonialView, CONTACT_ANCHOR,
};
use crate::core::Section;
use crate::page::PackageType;
use crate::t;

/// "Nothing here yet" block linking editors to the CMS admin.
#[component]
pub fn AdminPrompt(message: String, admin_url: String) -> Element {
    rsx! {
        div { class: "admin-prompt",
            p { "{message}" }
            a {
                class: "admin-prompt__link",
                href: "{admin_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                {t!("admin-link")}
            }
        }
    }
}

#[component]
pub fn HeroBanner(hero: HeroView) -> Element {
    rsx! {
        header { class: "hero",
            div { class: "hero__inner",
                p { class: "hero__eyebrow", "{hero.eyebrow}" }
                h1 { class: "hero__heading", "{hero.heading}" }
                p { class: "hero__subtitle", "{hero.subtitle}" }
                if !hero.highlight.is_empty() {
                    div { class: "hero__highlight",
                        span { aria_hidden: "true", "💡" }
                        span { "{hero.highlight}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FeatureList(features: Vec<FeatureView>) -> Element {
    rsx! {
        section { id: "features", class: "section section--plain",
            div { class: "feature-grid",
                for feature in features {
                    div { key: "{feature.id}", class: "feature",
                        span { class: "feature__check", "✓" }
                        div {
                            h3 { class: "feature__title", "{feature.title}" }
                            p { class: "feature__text", "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CallToActionBar(cta: LinkView) -> Element {
    rsx! {
        div { class: "section section--muted cta-bar",
            a { class: "button button--primary", href: "{cta.href}",
                span { aria_hidden: "true", "📞" }
                span { "{cta.label}" }
            }
        }
    }
}

#[component]
pub fn ServicesBlock(services: ServicesView) -> Element {
    rsx! {
        section { id: "services", class: "section section--muted services",
            div { class: "services__media",
                if let Some(image) = services.image {
                    img { class: "services__image", src: "{image.src}", alt: "{image.alt}" }
                } else {
                    div { class: "services__placeholder", {t!("services-image-placeholder")} }
                }
            }
            div { class: "services__body",
                p { class: "section__eyebrow", "{services.eyebrow}" }
                h2 { class: "section__title", "{services.title}" }
                p { class: "services__description", "{services.description}" }
                for point in services.points {
                    div { key: "{point.id}", class: "services__point",
                        h3 { "{point.title}" }
                        p { "{point.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProcessBlock(steps: Vec<StepView>) -> Element {
    rsx! {
        section { id: "process", class: "section section--dark process",
            div { class: "section__header",
                p { class: "section__eyebrow", {t!("process-eyebrow")} }
                h2 { class: "section__title", {t!("process-title")} }
            }
            ol { class: "process__steps",
                for step in steps {
                    li { key: "{step.id}", class: "process__step",
                        span { class: "process__number", "{step.number}" }
                        div {
                            h3 { "{step.title}" }
                            p { "{step.description}" }
                        }
                    }
                }
            }
            div { class: "section__footer",
                a { class: "button button--light", href: CONTACT_ANCHOR,
                    span { aria_hidden: "true", "📞" }
                    span { {t!("process-contact")} }
                }
            }
        }
    }
}

#[component]
pub fn OfferingsBlock(offerings: OfferingsView, on_select: EventHandler<PackageType>) -> Element {
    rsx! {
        section { id: "packages", class: "section section--plain offerings",
            div { class: "section__header",
                p { class: "section__eyebrow", "{offerings.title}" }
                h2 { class: "section__title", "{offerings.subtitle}" }
                div { class: "offerings__tabs", role: "tablist",
                    for kind in PackageType::ALL {
                        button {
                            key: "{kind.as_str()}",
                            class: tab_class(kind == offerings.active),
                            role: "tab",
                            aria_selected: "{kind == offerings.active}",
                            onclick: move |_| on_select.call(kind),
                            "{kind.as_str()}"
                        }
                    }
                }
            }
            if let Section::Shown(packages) = offerings.packages {
                div { class: "offerings__grid",
                    for pkg in packages {
                        article { key: "{pkg.id}", class: "package",
                            h3 { class: "package__name", "{pkg.name}" }
                            div { class: "package__price", "{pkg.price}" }
                            p { class: "package__description", "{pkg.description}" }
                            a { class: "button button--outline", href: "{pkg.button.href}",
                                span { "{pkg.button.label}" }
                                span { aria_hidden: "true", "→" }
                            }
                        }
                    }
                }
            }
            ul { class: "offerings__features",
                for feature in offerings.features {
                    li { key: "{feature.id}",
                        span { class: "feature__check", "✓" }
                        span { "{feature.text}" }
                    }
                }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "offerings__tab offerings__tab--active"
    } else {
        "offerings__tab"
    }
}

#[component]
pub fn TestimonialsBlock(testimonials: Section<Vec<TestimonialView>>) -> Element {
    rsx! {
        section { id: "testimonials", class: "section section--muted testimonials",
            h2 { class: "section__title", {t!("testimonials-title")} }
            {match testimonials {
                Section::Shown(items) => rsx! {
                    div { class: "testimonials__grid",
                        for (id, item) in items.into_iter().map(|item| (item.id, item)) {
                            TestimonialCard { key: "{id}", item }
                        }
                    }
                },
                Section::Empty { admin_url } => rsx! {
                    AdminPrompt { message: t!("testimonials-empty"), admin_url }
                },
                Section::Hidden => rsx! {},
            }}
        }
    }
}

#[component]
fn TestimonialCard(item: TestimonialView) -> Element {
    rsx! {
        figure { class: "testimonial",
            {match item.avatar {
                Avatar::Photo(image) => rsx! {
                    img { class: "testimonial__avatar", src: "{image.src}", alt: "{image.alt}" }
                },
                Avatar::Initial(initial) => rsx! {
                    span { class: "testimonial__avatar testimonial__avatar--initial", "{initial}" }
                },
            }}
            blockquote { class: "testimonial__quote", "{item.quote}" }
            figcaption { class: "testimonial__author",
                span { class: "testimonial__name", "{item.name}" }
                if let Some(company) = item.company {
                    span { class: "testimonial__company", "{company}" }
                }
            }
        }
    }
}

#[component]
pub fn FaqBlock(faqs: Section<Vec<FaqView>>, on_toggle: EventHandler<u64>) -> Element {
    rsx! {
        section { id: "faqs", class: "section section--plain faqs",
            h2 { class: "section__title", {t!("faqs-title")} }
            {match faqs {
                Section::Shown(items) => rsx! {
                    div { class: "faqs__list",
                        for faq in items {
                            div { key: "{faq.id}", class: "faq",
                                button {
                                    class: "faq__question",
                                    aria_expanded: "{faq.expanded}",
                                    onclick: move |_| on_toggle.call(faq.id),
                                    span { "{faq.question}" }
                                    span { class: "faq__sign", if faq.expanded { "−" } else { "+" } }
                                }
                                if faq.expanded {
                                    div { class: "faq__answer", "{faq.answer}" }
                                }
                            }
                        }
                    }
                },
                Section::Empty { admin_url } => rsx! {
                    AdminPrompt { message: t!("faqs-empty"), admin_url }
                },
                Section::Hidden => rsx! {},
            }}
        }
    }
}

#[component]
pub fn TrustedBy(logos: Vec<LogoView>) -> Element {
    rsx! {
        section { id: "trusted-by", class: "section section--plain trusted",
            h2 { class: "section__title", {t!("trusted-title")} }
            div { class: "trusted__logos",
                for company in logos {
                    div { key: "{company.id}", class: "trusted__item",
                        if let Some(logo) = company.logo {
                            img { class: "trusted__logo", src: "{logo.src}", alt: "{logo.alt}" }
                        } else {
                            span { class: "trusted__name", "{company.name}" }
                        }
                    }
                }
            }
        }
    }
}

/// Static "Get in touch" block; there is no form to submit.
#[component]
pub fn ContactBlock(contact: ContactView) -> Element {
    rsx! {
        section { id: "contact", class: "section section--dark contact",
            h2 { class: "section__title", {t!("contact-title")} }
            p { class: "contact__tagline", {t!("contact-tagline")} }
            div { class: "contact__actions",
                a { class: "button button--light", href: "{contact.mailto}", {t!("contact-email")} }
                a { class: "button button--outline-light", href: "#", {t!("contact-call")} }
            }
        }
    }
}
