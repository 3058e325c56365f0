//! Dashboard configuration.
//!
//! The launchers hand a `DashboardConfig` to the view tree through Dioxus
//! context; views fall back to `DashboardConfig::default()` when none was
//! provided.

use serde::{Deserialize, Serialize};

/// Location of the published salary dataset.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/vqrca/dashboard_salarios_dados/refs/heads/main/dados-imersao-final.csv";

/// Number of roles listed in the top-salary bar chart.
pub const DEFAULT_TOP_ROLES: usize = 10;

/// Bin count of the salary histogram.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// Role the country map is restricted to.
pub const DEFAULT_MAP_ROLE: &str = "Data Scientist";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset_url: String,
    pub top_roles: usize,
    pub histogram_bins: usize,
    pub map_role: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            top_roles: DEFAULT_TOP_ROLES,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            map_role: DEFAULT_MAP_ROLE.to_string(),
        }
    }
}
