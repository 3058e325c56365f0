//! Shared UI crate for the salary dashboard. Data loading, analytics and
//! every view live here; the launcher crates only wire routes and themes.

pub mod analytics;
pub mod core;
pub mod dashboard;
pub mod data;
pub mod i18n;

pub mod views {
    mod dashboard;
    pub use dashboard::Dashboard;
}

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}


use dioxus::prelude::*;

/// Shared dashboard theme. Web links it; desktop embeds the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
