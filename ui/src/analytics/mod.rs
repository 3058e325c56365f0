//! Scalar metrics and chart-ready aggregations over a working subset.

mod aggregate;
mod metrics;

pub use aggregate::{
    country_salaries, mean_salary_by_country, remote_share, salary_histogram, top_roles_by_mean,
    CountryMean, Histogram, RemoteShare, RoleMean,
};
pub use metrics::SummaryMetrics;
