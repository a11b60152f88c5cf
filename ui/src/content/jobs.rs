use tracing::info;

use super::{ContentKind, LoadError, Settled};
use crate::cms::ContentSource;
use crate::models::{Category, JobListing};

/// Data behind the job board page. Not localized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobBoardContent {
    pub categories: Vec<Category>,
    pub listings: Vec<JobListing>,
    pub failed: Vec<ContentKind>,
}

/// Fetch categories (with icons) and job listings concurrently.
pub async fn load_job_board<S: ContentSource>(source: &S) -> Result<JobBoardContent, LoadError> {
    let categories_query = ContentKind::Categories.query();
    let listings_query = ContentKind::JobListings.query();
    let (categories, listings) = futures::join!(
        source.fetch(&categories_query),
        source.fetch(&listings_query)
    );

    let mut settled = Settled::default();
    let content = JobBoardContent {
        categories: settled.collection(ContentKind::Categories, categories)?,
        listings: settled.collection(ContentKind::JobListings, listings)?,
        failed: settled.failed,
    };

    info!(
        categories = content.categories.len(),
        listings = content.listings.len(),
        "job board loaded"
    );
    Ok(content)
}
