//! Job board view model: category tiles, listing cards, API status.

use crate::content::{ContentKind, JobBoardContent};
use crate::core::config::SiteConfig;
use crate::core::format;
use crate::core::Section;
use crate::landing::view::{or_placeholder, Image};
use crate::models::{Category, JobListing, RichText};

pub const UNKNOWN_CATEGORY: &str = "Unknown Category";
pub const UNTITLED_JOB: &str = "Job Title Not Specified";
pub const UNKNOWN_COMPANY: &str = "Company Not Specified";
pub const UNKNOWN_LOCATION: &str = "Location Not Specified";
pub const DEFAULT_JOB_TYPE: &str = "Full-time";
pub const NO_DESCRIPTION: &str = "No description available";
pub const DEFAULT_CATEGORY_EMOJI: &str = "💼";

const CATEGORY_EMOJI: &[(&[&str], &str)] = &[
    (&["technology", "it", "software"], "💻"),
    (&["healthcare", "medical"], "🏥"),
    (&["finance", "banking"], "💰"),
    (&["education", "teaching"], "📚"),
    (&["marketing", "sales"], "📈"),
    (&["engineering"], "⚙️"),
    (&["design", "creative"], "🎨"),
    (&["customer service"], "📞"),
    (&["human resources", "hr"], "👥"),
    (&["logistics", "transportation"], "🚚"),
];

/// Emoji for a category name, matched case-insensitively on the exact name.
pub fn category_emoji(name: Option<&str>) -> &'static str {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return DEFAULT_CATEGORY_EMOJI;
    };
    let name = name.to_lowercase();
    CATEGORY_EMOJI
        .iter()
        .find(|(names, _)| names.contains(&name.as_str()))
        .map_or(DEFAULT_CATEGORY_EMOJI, |&(_, emoji)| emoji)
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryIcon {
    Image(Image),
    Emoji(&'static str),
}

/// Uploaded icon first, then the emoji table, then the briefcase.
pub fn category_icon(category: &Category, config: &SiteConfig) -> CategoryIcon {
    let uploaded = category
        .icon
        .as_ref()
        .and_then(|media| media.src(config).map(|src| (media, src)));
    match uploaded {
        Some((media, src)) => CategoryIcon::Image(Image {
            src,
            alt: media.alt_or(&category.name),
        }),
        None => CategoryIcon::Emoji(category_emoji(Some(&category.name))),
    }
}

/// Card summary: the first line of the first paragraph.
pub fn job_summary(description: Option<&RichText>) -> String {
    let summary = match description {
        Some(RichText::Plain(text)) => text.clone(),
        Some(RichText::Blocks(blocks)) => blocks
            .first()
            .and_then(|block| block.children.as_ref())
            .and_then(|children| children.first())
            .and_then(|inline| inline.text.clone())
            .unwrap_or_default(),
        Some(RichText::Other(_)) | None => String::new(),
    };
    or_placeholder(&summary, NO_DESCRIPTION)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub id: u64,
    pub name: String,
    pub icon: CategoryIcon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobCard {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
    pub job_type: String,
    pub summary: String,
    /// `None` when the CMS sent no usable creation date.
    pub posted: Option<String>,
}

impl JobCard {
    pub fn from_listing(job: &JobListing) -> Self {
        let salary = job
            .salary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            id: job.id,
            title: or_placeholder(&job.title, UNTITLED_JOB),
            company: or_placeholder(&job.company, UNKNOWN_COMPANY),
            location: or_placeholder(&job.location, UNKNOWN_LOCATION),
            salary,
            job_type: or_placeholder(&job.job_type, DEFAULT_JOB_TYPE),
            summary: job_summary(job.description.as_ref()),
            posted: format::format_posted_date(job.meta.created_at.as_deref()),
        }
    }
}

/// Counts for the status panel; `ok` is false when that request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiStatus {
    pub categories: usize,
    pub categories_ok: bool,
    pub listings: usize,
    pub listings_ok: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobBoardView {
    pub categories: Vec<CategoryView>,
    pub listings: Section<Vec<JobCard>>,
    pub status: ApiStatus,
}

impl JobBoardView {
    pub fn build(content: &JobBoardContent, config: &SiteConfig) -> Self {
        let categories = content
            .categories
            .iter()
            .map(|category| CategoryView {
                id: category.id,
                name: or_placeholder(&category.name, UNKNOWN_CATEGORY),
                icon: category_icon(category, config),
            })
            .collect();

        Self {
            categories,
            listings: Section::list_or_empty(
                content.listings.iter().map(JobCard::from_listing).collect(),
                &config.admin_url(),
            ),
            status: ApiStatus {
                categories: content.categories.len(),
                categories_ok: !content.failed.contains(&ContentKind::Categories),
                listings: content.listings.len(),
                listings_ok: !content.failed.contains(&ContentKind::JobListings),
            },
        }
    }
}
