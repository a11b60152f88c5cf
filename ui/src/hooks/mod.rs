//! Dioxus hooks over CMS data that is shared across pages.

pub mod navigation;

pub use navigation::{load_navigation, use_navigation, NavigationData, NavigationState, UseNavigation};
