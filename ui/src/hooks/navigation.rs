//! Navigation items and site settings (name, logo) from the CMS.
//!
//! Loaded once per app, independent of the page locale. A missing or
//! failing endpoint just means no links or no logo; only a broken CMS URL
//! surfaces as an error.

use dioxus::prelude::*;
use tracing::error;

use crate::cms::{CmsClient, ContentSource};
use crate::content::{ContentKind, LoadError, Settled};
use crate::models::{NavigationItem, SiteSettings};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationData {
    /// Every item as received, sorted by the CMS (`order:asc`).
    pub items: Vec<NavigationItem>,
    pub settings: Option<SiteSettings>,
}

impl NavigationData {
    /// Active items, keeping the CMS order.
    pub fn active_items(&self) -> Vec<NavigationItem> {
        self.items.iter().filter(|item| item.is_active).cloned().collect()
    }

    /// Site name from the settings, or `fallback`.
    pub fn site_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.settings
            .as_ref()
            .map(|s| s.site_name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback)
    }
}

/// Fetch navigation items and site settings concurrently.
pub async fn load_navigation<S: ContentSource>(source: &S) -> Result<NavigationData, LoadError> {
    let items_query = ContentKind::Navigation.query();
    let settings_query = ContentKind::SiteSettings.query();
    let (items, settings) = futures::join!(
        source.fetch(&items_query),
        source.fetch(&settings_query)
    );

    let mut settled = Settled::default();
    Ok(NavigationData {
        items: settled.collection(ContentKind::Navigation, items)?,
        settings: settled.single(ContentKind::SiteSettings, settings)?,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub loading: bool,
    pub error: Option<String>,
    pub data: NavigationData,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            data: NavigationData::default(),
        }
    }
}

impl NavigationState {
    fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A failed reload keeps the previous data.
    fn finish(&mut self, result: Result<NavigationData, LoadError>) {
        match result {
            Ok(data) => self.data = data,
            Err(err) => {
                error!(error = %err, "navigation failed to load");
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }
}

/// Handle returned by [`use_navigation`].
#[derive(Clone, Copy, PartialEq)]
pub struct UseNavigation {
    state: Signal<NavigationState>,
    client: Signal<CmsClient>,
}

impl UseNavigation {
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn items(&self) -> Vec<NavigationItem> {
        self.state.read().data.active_items()
    }

    pub fn settings(&self) -> Option<SiteSettings> {
        self.state.read().data.settings.clone()
    }

    pub fn data(&self) -> NavigationData {
        self.state.read().data.clone()
    }

    /// Reload both endpoints in the background.
    pub fn refetch(&self) {
        let mut state = self.state;
        let client: CmsClient = (*self.client.peek()).clone();
        spawn(async move {
            state.with_mut(NavigationState::start);
            let result = load_navigation(&client).await;
            state.with_mut(|s| s.finish(result));
        });
    }
}

/// Navigation data for the app chrome. Expects a [`CmsClient`] in context.
pub fn use_navigation() -> UseNavigation {
    let client = use_context::<CmsClient>();
    let state = use_signal(NavigationState::default);
    let client = use_signal(move || client);
    let handle = UseNavigation { state, client };
    use_hook(move || handle.refetch());
    handle
}
