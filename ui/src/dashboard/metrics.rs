use dioxus::prelude::*;

use crate::analytics::SummaryMetrics;
use crate::core::format;
use crate::t;

/// The four headline cards. An empty subset shows zeroes and a blank role.
#[component]
pub fn MetricCards(metrics: SummaryMetrics) -> Element {
    let top_role = if metrics.top_role.is_empty() {
        "—".to_string()
    } else {
        metrics.top_role.clone()
    };

    rsx! {
        div { class: "metric-cards",
            MetricCard {
                label: t!("metric-mean-salary"),
                value: format::format_usd(metrics.mean_salary),
            }
            MetricCard {
                label: t!("metric-max-salary"),
                value: format::format_usd(metrics.max_salary),
            }
            MetricCard {
                label: t!("metric-total-records"),
                value: format::format_count(metrics.record_count),
            }
            MetricCard {
                label: t!("metric-top-role"),
                value: top_role,
                modifier: "metric-card--text",
            }
        }
    }
}

#[component]
fn MetricCard(label: String, value: String, #[props(default)] modifier: String) -> Element {
    rsx! {
        div { class: "metric-card {modifier}",
            span { class: "metric-card__label", "{label}" }
            strong { class: "metric-card__value", title: "{value}", "{value}" }
        }
    }
}
