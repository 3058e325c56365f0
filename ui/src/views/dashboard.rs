use dioxus::prelude::*;
use tracing::debug;

use crate::analytics::SummaryMetrics;
use crate::core::config::DashboardConfig;
use crate::dashboard::{
    CountryMapChart, DetailTable, ExportPanel, FilterSidebar, MetricCards, RemoteDonutChart,
    SalaryHistogramChart, TopRolesChart,
};
use crate::data::{load_cached, FilterOptions, FilterSelection, SharedDataset};
use crate::t;

/// Salary dashboard page. Loads the dataset once, then hands it to the
/// interactive body; a failed load replaces the whole body with an error
/// panel.
#[component]
pub fn Dashboard() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();

    let dataset = {
        let url = config.dataset_url.clone();
        use_resource(move || {
            let url = url.clone();
            async move { load_cached(&url).await }
        })
    };

    let body = match &*dataset.read_unchecked() {
        None => rsx! {
            p { class: "dashboard__status", role: "status", {t!("loading-dataset")} }
        },
        Some(Err(err)) => rsx! {
            section { class: "dashboard__error", role: "alert",
                h2 { {t!("load-error-title")} }
                p { class: "dashboard__error-detail", "{err}" }
                p { {t!("load-error-hint")} }
            }
        },
        Some(Ok(data)) => rsx! {
            DashboardBody { dataset: SharedDataset(data.clone()), config: config.clone() }
        },
    };

    rsx! {
        div { class: "page dashboard",
            header { class: "dashboard__header",
                h1 { class: "dashboard__title", "📊 " {t!("page-title")} }
                p { class: "dashboard__intro", {t!("page-intro")} }
            }
            {body}
        }
    }
}

/// Launchers may provide a `Signal<Option<FilterSelection>>` above the
/// language-keyed remount; the body restores its filters from it and writes
/// every change back.
#[component]
fn DashboardBody(dataset: SharedDataset, config: DashboardConfig) -> Element {
    let data = dataset.0;
    let saved = try_use_context::<Signal<Option<FilterSelection>>>();
    let options = use_hook(|| FilterOptions::from_dataset(&data));
    let selection = use_signal(|| {
        let saved = saved.and_then(|saved| saved.peek().clone());
        FilterSelection::restore(saved.as_ref(), &options)
    });

    use_effect(move || {
        let current = selection();
        if let Some(mut saved) = saved {
            saved.set(Some(current));
        }
    });

    let subset = use_memo(move || {
        let subset = selection.read().apply(&data);
        debug!(rows = subset.len(), "filters applied");
        subset
    });
    let metrics = use_memo(move || SummaryMetrics::from_subset(&subset.read()));

    rsx! {
        div { class: "dashboard__layout",
            FilterSidebar { options: options.clone(), selection }

            main { class: "dashboard__main",
                section { class: "dashboard__section",
                    h2 { class: "dashboard__section-title", {t!("metrics-header")} }
                    MetricCards { metrics: metrics() }
                }

                section { class: "dashboard__section",
                    h2 { class: "dashboard__section-title", {t!("charts-header")} }
                    div { class: "dashboard__charts",
                        TopRolesChart { subset: subset(), limit: config.top_roles }
                        SalaryHistogramChart { subset: subset(), bins: config.histogram_bins }
                        RemoteDonutChart { subset: subset() }
                        CountryMapChart { subset: subset(), role: config.map_role.clone() }
                    }
                }

                section { class: "dashboard__section",
                    div { class: "dashboard__section-header",
                        h2 { class: "dashboard__section-title", {t!("table-header")} }
                        ExportPanel { subset: subset() }
                    }
                    DetailTable { subset: subset() }
                }
            }
        }
    }
}
