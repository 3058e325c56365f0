//! Dashboard building blocks: sidebar filters, metric cards, charts, the
//! detail table and its CSV export.

pub mod charts;
pub mod export;
pub mod metrics;
pub mod sidebar;
pub mod table;

pub use charts::{ChartCard, CountryMapChart, RemoteDonutChart, SalaryHistogramChart, TopRolesChart};
pub use export::ExportPanel;
pub use metrics::MetricCards;
pub use sidebar::FilterSidebar;
pub use table::DetailTable;
