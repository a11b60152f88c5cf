//! Shared UI crate for the ITGrate site. CMS access, locale resolution,
//! page state and every view live here; platform crates only launch.

pub mod cms;
pub mod content;
pub mod core;
pub mod hooks;
pub mod i18n;
pub mod jobs;
pub mod landing;
pub mod locale;
pub mod models;
pub mod page;
pub mod views;

use dioxus::prelude::manganis;

/// Shared site theme. Web links it; desktop embeds the same file.
pub const THEME_CSS: dioxus::prelude::Asset = dioxus::prelude::asset!("/assets/theme/main.css");

pub mod components {
    // CMS-driven application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Flag/code language picker used by the landing page
    pub mod language_switcher;
    pub use language_switcher::{flag_for, LanguageSwitcher};
}
