use std::fmt;

use crate::cms::ContentQuery;

/// Every content type the site reads, with the request directives it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    HeroSection,
    Features,
    CallToAction,
    CompanyLogos,
    ServiceSection,
    ServicePoints,
    ProcessSteps,
    OfferingsSection,
    Packages,
    PackageFeatures,
    Testimonials,
    Faqs,
    Categories,
    JobListings,
    Languages,
    Navigation,
    SiteSettings,
}

impl ContentKind {
    /// The localized landing-page content, in page order.
    pub const LANDING: [Self; 12] = [
        Self::HeroSection,
        Self::Features,
        Self::CallToAction,
        Self::CompanyLogos,
        Self::ServiceSection,
        Self::ServicePoints,
        Self::ProcessSteps,
        Self::OfferingsSection,
        Self::Packages,
        Self::PackageFeatures,
        Self::Testimonials,
        Self::Faqs,
    ];

    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::HeroSection => "hero-sections",
            Self::Features => "features",
            Self::CallToAction => "call-to-actions",
            Self::CompanyLogos => "company-logos",
            Self::ServiceSection => "service-sections",
            Self::ServicePoints => "service-points",
            Self::ProcessSteps => "process-steps",
            Self::OfferingsSection => "offerings-sections",
            Self::Packages => "packages",
            Self::PackageFeatures => "package-features",
            Self::Testimonials => "testimonials",
            Self::Faqs => "faqs",
            Self::Categories => "categories",
            Self::JobListings => "job-listings",
            Self::Languages => "languages",
            Self::Navigation => "navigations",
            Self::SiteSettings => "site-setting",
        }
    }

    /// Embedded media to expand.
    pub const fn populate(self) -> Option<&'static str> {
        match self {
            Self::CompanyLogos | Self::SiteSettings => Some("logo"),
            Self::ServiceSection => Some("image"),
            Self::Testimonials => Some("profile_image"),
            Self::Categories => Some("Icon"),
            _ => None,
        }
    }

    pub const fn sort(self) -> Option<&'static str> {
        match self {
            Self::CompanyLogos
            | Self::ServiceSection
            | Self::ServicePoints
            | Self::ProcessSteps
            | Self::Packages
            | Self::PackageFeatures
            | Self::Testimonials
            | Self::Faqs
            | Self::Languages
            | Self::Navigation => Some("order:asc"),
            _ => None,
        }
    }

    /// Request without a locale (site-wide content).
    pub fn query(self) -> ContentQuery {
        let mut query = ContentQuery::new(self.endpoint());
        if let Some(field) = self.populate() {
            query = query.populate(field);
        }
        if let Some(directive) = self.sort() {
            query = query.sort(directive);
        }
        query
    }

    pub fn localized_query(self, locale: &str) -> ContentQuery {
        self.query().locale(locale)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const API: &str = "http://localhost:1337/api";

    #[test]
    fn landing_queries_carry_locale_and_directives() {
        let url = ContentKind::Testimonials
            .localized_query("ar")
            .url(API)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:1337/api/testimonials?populate=profile_image&sort=order%3Aasc&locale=ar"
        );

        let url = ContentKind::HeroSection.localized_query("en").url(API).unwrap();
        assert_eq!(url.as_str(), "http://localhost:1337/api/hero-sections?locale=en");
    }

    #[test]
    fn site_wide_queries_match_cms_routes() {
        assert_eq!(
            ContentKind::SiteSettings.query().url(API).unwrap().as_str(),
            "http://localhost:1337/api/site-setting?populate=logo"
        );
        assert_eq!(
            ContentKind::Categories.query().url(API).unwrap().as_str(),
            "http://localhost:1337/api/categories?populate=Icon"
        );
    }

    #[test]
    fn landing_endpoints_are_distinct() {
        let mut endpoints: Vec<_> = ContentKind::LANDING.iter().map(|k| k.endpoint()).collect();
        endpoints.sort_unstable();
        endpoints.dedup();
        assert_eq!(endpoints.len(), ContentKind::LANDING.len());
    }
}
