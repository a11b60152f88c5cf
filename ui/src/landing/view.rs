//! Landing page view model.
//!
//! [`LandingView::build`] turns loaded content plus the page toggles into
//! exactly what the components print: placeholders applied, rich text
//! flattened, packages filtered. It does no I/O, so every rendering rule is
//! testable without a DOM.

use crate::content::PageContent;
use crate::core::config::SiteConfig;
use crate::core::format;
use crate::core::Section;
use crate::locale::text_direction;
use crate::models::{
    extract_text, CallToAction, CompanyLogo, Faq, HeroSection, Media, OfferingsSection, Package,
    ServiceSection, Testimonial,
};
use crate::page::{PackageType, UiState};

pub const OFFERINGS_TITLE: &str = "Our Offerings";
pub const OFFERINGS_SUBTITLE: &str = "All Packages at a Glance";
pub const CONTACT_ANCHOR: &str = "#contact";
const SERVICE_IMAGE_ALT: &str = "Services";

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

impl Image {
    fn from_media(media: Option<&Media>, fallback_alt: &str, config: &SiteConfig) -> Option<Self> {
        let media = media?;
        Some(Self {
            src: media.src(config)?,
            alt: media.alt_or(fallback_alt),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    pub eyebrow: String,
    pub heading: String,
    pub subtitle: String,
    pub highlight: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureView {
    pub id: u64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServicePointView {
    pub id: u64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServicesView {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    /// `None` renders the image placeholder.
    pub image: Option<Image>,
    pub points: Vec<ServicePointView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub id: u64,
    pub number: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageView {
    pub id: u64,
    pub name: String,
    pub price: String,
    pub description: String,
    pub button: LinkView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureLine {
    pub id: u64,
    pub text: String,
}

/// Always rendered: the title, subtitle and type tabs do not depend on the CMS.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferingsView {
    pub title: String,
    pub subtitle: String,
    pub active: PackageType,
    pub packages: Section<Vec<PackageView>>,
    pub features: Vec<FeatureLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Avatar {
    Photo(Image),
    Initial(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialView {
    pub id: u64,
    pub name: String,
    pub company: Option<String>,
    pub quote: String,
    pub avatar: Avatar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqView {
    pub id: u64,
    pub question: String,
    pub answer: String,
    pub expanded: bool,
}

/// A "Trusted By" entry: the logo, or the company name when there is none.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoView {
    pub id: u64,
    pub name: String,
    pub logo: Option<Image>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    pub email: String,
    pub mailto: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandingView {
    /// `dir` attribute for the page root.
    pub direction: &'static str,
    pub locale: String,
    /// Some content failed to load and renders as empty.
    pub degraded: bool,
    pub hero: Section<HeroView>,
    pub features: Section<Vec<FeatureView>>,
    pub call_to_action: Section<LinkView>,
    pub services: Section<ServicesView>,
    pub process: Section<Vec<StepView>>,
    pub offerings: OfferingsView,
    pub testimonials: Section<Vec<TestimonialView>>,
    pub faqs: Section<Vec<FaqView>>,
    pub trusted_by: Section<Vec<LogoView>>,
    pub contact: ContactView,
}

impl LandingView {
    pub fn build(content: &PageContent, ui: &UiState, config: &SiteConfig) -> Self {
        let admin_url = config.admin_url();

        Self {
            direction: text_direction(&content.locale),
            locale: content.locale.clone(),
            degraded: content.is_degraded(),
            hero: Section::or_hidden(content.hero.as_ref().map(hero)),
            features: Section::list_or_hidden(
                content
                    .features
                    .iter()
                    .map(|f| FeatureView {
                        id: f.id,
                        title: f.title.clone(),
                        description: f.description.clone(),
                    })
                    .collect(),
            ),
            call_to_action: Section::or_hidden(content.call_to_action.as_ref().map(call_to_action)),
            services: Section::or_hidden(
                content
                    .service_section
                    .as_ref()
                    .map(|section| services(section, content, config)),
            ),
            process: Section::list_or_hidden(
                content
                    .process_steps
                    .iter()
                    .map(|step| StepView {
                        id: step.id,
                        number: step.step_number,
                        title: step.title.clone(),
                        description: step.description.clone(),
                    })
                    .collect(),
            ),
            offerings: offerings(content.offerings.as_ref(), content, ui.package_type),
            testimonials: Section::list_or_empty(
                content
                    .testimonials
                    .iter()
                    .map(|t| testimonial(t, config))
                    .collect(),
                &admin_url,
            ),
            faqs: Section::list_or_empty(
                content.faqs.iter().map(|f| faq(f, ui)).collect(),
                &admin_url,
            ),
            trusted_by: Section::list_or_hidden(
                content
                    .company_logos
                    .iter()
                    .map(|c| company_logo(c, config))
                    .collect(),
            ),
            contact: ContactView {
                email: config.contact_email.clone(),
                mailto: format!("mailto:{}", config.contact_email),
            },
        }
    }

    /// Anchor ids of the sections that render, in page order. Hidden sections
    /// produce no markup at all, so the nav must not link to them either.
    pub fn rendered_sections(&self) -> Vec<&'static str> {
        let gated = [
            ("features", self.features.is_shown()),
            ("services", self.services.is_shown()),
            ("process", self.process.is_shown()),
            ("packages", true),
            ("testimonials", self.testimonials != Section::Hidden),
            ("faqs", self.faqs != Section::Hidden),
            ("trusted-by", self.trusted_by.is_shown()),
            ("contact", true),
        ];
        gated
            .into_iter()
            .filter_map(|(id, rendered)| rendered.then_some(id))
            .collect()
    }
}

/// `value`, or `fallback` when it is blank.
pub(crate) fn or_placeholder(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

fn hero(section: &HeroSection) -> HeroView {
    HeroView {
        eyebrow: section.title.clone(),
        heading: section.main_heading.clone(),
        subtitle: section.subtitle.clone(),
        highlight: section.description.clone(),
    }
}

fn call_to_action(cta: &CallToAction) -> LinkView {
    LinkView {
        label: cta.button_text.clone(),
        href: or_placeholder(&cta.button_link, CONTACT_ANCHOR),
    }
}

fn services(section: &ServiceSection, content: &PageContent, config: &SiteConfig) -> ServicesView {
    ServicesView {
        eyebrow: section.subtitle.clone(),
        title: section.title.clone(),
        description: extract_text(section.description.as_ref()),
        image: Image::from_media(section.image.as_ref(), SERVICE_IMAGE_ALT, config),
        points: content
            .service_points
            .iter()
            .map(|point| ServicePointView {
                id: point.id,
                title: point.title.clone(),
                description: extract_text(point.description.as_ref()),
            })
            .collect(),
    }
}

fn offerings(
    section: Option<&OfferingsSection>,
    content: &PageContent,
    active: PackageType,
) -> OfferingsView {
    let title = section.map(|s| s.title.as_str()).unwrap_or_default();
    let subtitle = section.map(|s| s.subtitle.as_str()).unwrap_or_default();

    OfferingsView {
        title: or_placeholder(title, OFFERINGS_TITLE),
        subtitle: or_placeholder(subtitle, OFFERINGS_SUBTITLE),
        active,
        packages: Section::list_or_hidden(
            content
                .packages
                .iter()
                .filter(|pkg| active.matches(&pkg.package_type))
                .map(package)
                .collect(),
        ),
        features: content
            .package_features
            .iter()
            .filter(|feature| active.matches(&feature.package_type))
            .map(|feature| FeatureLine {
                id: feature.id,
                text: feature.feature_text.clone(),
            })
            .collect(),
    }
}

fn package(pkg: &Package) -> PackageView {
    PackageView {
        id: pkg.id,
        name: pkg.name.clone(),
        price: pkg.price.clone(),
        description: extract_text(pkg.description.as_ref()),
        button: LinkView {
            label: pkg.button_text.clone(),
            href: or_placeholder(&pkg.button_link, CONTACT_ANCHOR),
        },
    }
}

fn testimonial(t: &Testimonial, config: &SiteConfig) -> TestimonialView {
    let avatar = match Image::from_media(t.profile_image.as_ref(), &t.name, config) {
        Some(photo) => Avatar::Photo(photo),
        None => Avatar::Initial(format::initial(&t.name)),
    };
    let company = t.company.trim();

    TestimonialView {
        id: t.id,
        name: t.name.clone(),
        company: (!company.is_empty()).then(|| company.to_string()),
        quote: extract_text(t.content.as_ref()),
        avatar,
    }
}

fn faq(f: &Faq, ui: &UiState) -> FaqView {
    FaqView {
        id: f.id,
        question: f.question.clone(),
        answer: extract_text(f.answer.as_ref()),
        expanded: ui.expanded_faq == Some(f.id),
    }
}

fn company_logo(company: &CompanyLogo, config: &SiteConfig) -> LogoView {
    LogoView {
        id: company.id,
        name: company.name.clone(),
        logo: Image::from_media(company.logo.as_ref(), &company.name, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind;
    use crate::models::{Feature, PackageFeature, ProcessStep, RecordMeta, RichText};

    fn config() -> SiteConfig {
        SiteConfig::with_cms_url("http://cms.test")
    }

    fn media(url: Option<&str>, alt: Option<&str>) -> Media {
        Media {
            id: Some(1),
            name: "upload".into(),
            url: url.map(str::to_string),
            alternative_text: alt.map(str::to_string),
            width: None,
            height: None,
        }
    }

    fn package(id: u64, kind: &str) -> Package {
        Package {
            id,
            meta: RecordMeta::default(),
            name: format!("{kind} {id}"),
            package_type: kind.into(),
            price: "$10".into(),
            description: Some(RichText::paragraph("Monthly")),
            button_text: "Start".into(),
            button_link: String::new(),
            features: Vec::new(),
            order: id as i64,
        }
    }

    fn feature(id: u64, kind: &str) -> PackageFeature {
        PackageFeature {
            id,
            meta: RecordMeta::default(),
            feature_text: format!("feature {id}"),
            package_type: kind.into(),
            order: id as i64,
        }
    }

    #[test]
    fn empty_content_hides_sections_and_prompts_for_lists() {
        let view = LandingView::build(&PageContent::default(), &UiState::default(), &config());

        assert_eq!(view.hero, Section::Hidden);
        assert_eq!(view.features, Section::Hidden);
        assert_eq!(view.call_to_action, Section::Hidden);
        assert_eq!(view.services, Section::Hidden);
        assert_eq!(view.trusted_by, Section::Hidden);
        let admin_url: String = "http://cms.test/admin".into();
        assert_eq!(
            view.testimonials,
            Section::Empty {
                admin_url: admin_url.clone(),
            }
        );
        assert_eq!(view.faqs, Section::Empty { admin_url });
        assert_eq!(view.offerings.title, OFFERINGS_TITLE);
        assert_eq!(view.offerings.subtitle, OFFERINGS_SUBTITLE);
        assert_eq!(view.contact.mailto, "mailto:contact@itgrate.com");
    }

    #[test]
    fn hidden_sections_leave_no_anchor_behind() {
        let view = LandingView::build(&PageContent::default(), &UiState::default(), &config());
        assert_eq!(
            view.rendered_sections(),
            ["packages", "testimonials", "faqs", "contact"]
        );

        let content = PageContent {
            features: vec![Feature {
                id: 1,
                meta: RecordMeta::default(),
                title: "Vetted".into(),
                description: String::new(),
            }],
            process_steps: vec![ProcessStep {
                id: 1,
                meta: RecordMeta::default(),
                step_number: 1,
                title: "Talk".into(),
                description: String::new(),
                order: 1,
            }],
            failed: vec![ContentKind::CompanyLogos],
            ..PageContent::default()
        };
        let view = LandingView::build(&content, &UiState::default(), &config());
        let sections = view.rendered_sections();
        assert!(sections.contains(&"features"));
        assert!(sections.contains(&"process"));
        assert!(!sections.contains(&"trusted-by"));
        assert!(!sections.contains(&"services"));
    }

    #[test]
    fn failed_type_is_omitted_while_others_render() {
        let content = PageContent {
            hero: Some(HeroSection {
                id: 1,
                meta: RecordMeta::default(),
                title: "Remote".into(),
                main_heading: "Build your team".into(),
                subtitle: String::new(),
                description: String::new(),
            }),
            failed: vec![ContentKind::Features],
            ..PageContent::default()
        };
        let view = LandingView::build(&content, &UiState::default(), &config());

        assert!(view.degraded);
        assert_eq!(view.features, Section::Hidden);
        assert_eq!(
            view.hero.shown().map(|h| h.heading.as_str()),
            Some("Build your team")
        );
    }

    #[test]
    fn packages_and_features_follow_active_type() {
        let content = PageContent {
            packages: vec![package(1, "Flex"), package(2, "Fixed-Price"), package(3, "Flex")],
            package_features: vec![feature(1, "Fixed-Price"), feature(2, "Flex")],
            ..PageContent::default()
        };

        let flex = LandingView::build(&content, &UiState::default(), &config());
        let ids: Vec<_> = flex
            .offerings
            .packages
            .shown()
            .map(|p| p.iter().map(|p| p.id).collect())
            .unwrap_or_default();
        assert_eq!(ids, [1, 3]);
        assert_eq!(flex.offerings.features.len(), 1);
        assert_eq!(flex.offerings.features[0].id, 2);

        let ui = UiState {
            package_type: PackageType::FixedPrice,
            ..UiState::default()
        };
        let fixed = LandingView::build(&content, &ui, &config());
        let packages = fixed.offerings.packages.shown().cloned().unwrap_or_default();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].button.href, CONTACT_ANCHOR);
        assert_eq!(packages[0].description, "Monthly");
    }

    #[test]
    fn testimonial_without_photo_uses_initial() {
        let content = PageContent {
            testimonials: vec![
                Testimonial {
                    id: 1,
                    meta: RecordMeta::default(),
                    name: "lina".into(),
                    company: " ".into(),
                    content: Some(RichText::Plain("Great".into())),
                    profile_image: Some(media(None, None)),
                    order: 1,
                },
                Testimonial {
                    id: 2,
                    meta: RecordMeta::default(),
                    name: "Omar".into(),
                    company: "Acme".into(),
                    content: None,
                    profile_image: Some(media(Some("/uploads/omar.png"), None)),
                    order: 2,
                },
            ],
            ..PageContent::default()
        };
        let view = LandingView::build(&content, &UiState::default(), &config());
        let items = view.testimonials.shown().cloned().unwrap_or_default();

        assert_eq!(items[0].avatar, Avatar::Initial("L".into()));
        assert_eq!(items[0].company, None);
        assert_eq!(
            items[1].avatar,
            Avatar::Photo(Image {
                src: "http://cms.test/uploads/omar.png".into(),
                alt: "Omar".into(),
            })
        );
        assert_eq!(items[1].quote, "");
    }

    #[test]
    fn logo_falls_back_to_company_name_and_arabic_is_rtl() {
        let content = PageContent {
            locale: "ar".into(),
            company_logos: vec![CompanyLogo {
                id: 4,
                meta: RecordMeta::default(),
                name: "Acme".into(),
                logo: None,
                order: 1,
            }],
            faqs: vec![Faq {
                id: 9,
                meta: RecordMeta::default(),
                question: "How?".into(),
                answer: Some(RichText::paragraph("Like this")),
                order: 1,
            }],
            ..PageContent::default()
        };
        let ui = UiState {
            expanded_faq: Some(9),
            ..UiState::default()
        };
        let view = LandingView::build(&content, &ui, &config());

        assert_eq!(view.direction, "rtl");
        let logos = view.trusted_by.shown().cloned().unwrap_or_default();
        assert_eq!(logos[0].logo, None);
        assert_eq!(logos[0].name, "Acme");
        let faqs = view.faqs.shown().cloned().unwrap_or_default();
        assert!(faqs[0].expanded);
        assert_eq!(faqs[0].answer, "Like this");
    }

    #[test]
    fn service_image_falls_back_to_placeholder() {
        let content = PageContent {
            service_section: Some(ServiceSection {
                id: 1,
                meta: RecordMeta::default(),
                title: "Services".into(),
                subtitle: "What we do".into(),
                description: None,
                image: Some(media(Some("  "), Some("team"))),
                order: 1,
            }),
            ..PageContent::default()
        };
        let view = LandingView::build(&content, &UiState::default(), &config());
        let services = view.services.shown().cloned();
        assert_eq!(services.map(|s| s.image), Some(None));
    }
}
