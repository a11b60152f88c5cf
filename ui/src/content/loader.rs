use tracing::info;

use super::{ContentKind, LoadError, Settled};
use crate::cms::ContentSource;
use crate::models::{
    CallToAction, CompanyLogo, Faq, Feature, HeroSection, OfferingsSection, Package,
    PackageFeature, ProcessStep, ServicePoint, ServiceSection, Testimonial,
};

/// Everything the landing page shows for one locale.
///
/// Replaced wholesale on every load; never merged with a previous locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContent {
    pub locale: String,
    pub hero: Option<HeroSection>,
    pub features: Vec<Feature>,
    pub call_to_action: Option<CallToAction>,
    pub company_logos: Vec<CompanyLogo>,
    pub service_section: Option<ServiceSection>,
    pub service_points: Vec<ServicePoint>,
    pub process_steps: Vec<ProcessStep>,
    pub offerings: Option<OfferingsSection>,
    pub packages: Vec<Package>,
    pub package_features: Vec<PackageFeature>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
    /// Content types whose request failed and which therefore render as empty.
    pub failed: Vec<ContentKind>,
}

impl PageContent {
    pub fn is_degraded(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Fetch every landing content type for `locale` concurrently.
pub async fn load_page_content<S: ContentSource>(
    source: &S,
    locale: &str,
) -> Result<PageContent, LoadError> {
    info!(locale, "loading page content");

    let fetch = |kind: ContentKind| {
        let query = kind.localized_query(locale);
        async move { source.fetch(&query).await }
    };

    let (
        hero,
        features,
        call_to_action,
        company_logos,
        service_section,
        service_points,
        process_steps,
        offerings,
        packages,
        package_features,
        testimonials,
        faqs,
    ) = futures::join!(
        fetch(ContentKind::HeroSection),
        fetch(ContentKind::Features),
        fetch(ContentKind::CallToAction),
        fetch(ContentKind::CompanyLogos),
        fetch(ContentKind::ServiceSection),
        fetch(ContentKind::ServicePoints),
        fetch(ContentKind::ProcessSteps),
        fetch(ContentKind::OfferingsSection),
        fetch(ContentKind::Packages),
        fetch(ContentKind::PackageFeatures),
        fetch(ContentKind::Testimonials),
        fetch(ContentKind::Faqs),
    );

    let mut settled = Settled::default();
    let content = PageContent {
        locale: locale.to_string(),
        hero: settled.single(ContentKind::HeroSection, hero)?,
        features: settled.collection(ContentKind::Features, features)?,
        call_to_action: settled.single(ContentKind::CallToAction, call_to_action)?,
        company_logos: settled.collection(ContentKind::CompanyLogos, company_logos)?,
        service_section: settled.single(ContentKind::ServiceSection, service_section)?,
        service_points: settled.collection(ContentKind::ServicePoints, service_points)?,
        process_steps: settled.collection(ContentKind::ProcessSteps, process_steps)?,
        offerings: settled.single(ContentKind::OfferingsSection, offerings)?,
        packages: settled.collection(ContentKind::Packages, packages)?,
        package_features: settled.collection(ContentKind::PackageFeatures, package_features)?,
        testimonials: settled.collection(ContentKind::Testimonials, testimonials)?,
        faqs: settled.collection(ContentKind::Faqs, faqs)?,
        failed: settled.failed,
    };

    info!(locale, failed = content.failed.len(), "page content loaded");
    Ok(content)
}
