//! The four dashboard charts. Geometry lives in the submodules as pure
//! functions returning SVG markup. The `*_markup` functions here pick the
//! data and return `None` when a chart has nothing to draw; the components
//! translate titles and drop the markup into a [`ChartCard`].

use dioxus::prelude::*;

use crate::analytics::{
    mean_salary_by_country, remote_share, salary_histogram, top_roles_by_mean, RemoteShare,
};
use crate::core::format;
use crate::data::{country, WorkingSubset};
use crate::t;

pub mod bar;
pub mod choropleth;
pub mod donut;
pub mod histogram;
pub mod scale;

/// Titled card that shows `children`, or a warning line when the chart has
/// nothing to draw.
#[component]
pub fn ChartCard(
    title: String,
    empty_message: String,
    is_empty: bool,
    #[props(default)] modifier: String,
    children: Element,
) -> Element {
    rsx! {
        section { class: "dashboard-chart {modifier}",
            div { class: "dashboard-chart__header",
                h3 { class: "dashboard-chart__title", "{title}" }
            }
            if is_empty {
                p { class: "dashboard-chart__placeholder", role: "alert", "⚠️ {empty_message}" }
            } else {
                {children}
            }
        }
    }
}

/// Bar chart of the best-paid roles, or `None` for an empty subset.
pub fn top_roles_markup(subset: &WorkingSubset, limit: usize, axis_label: &str) -> Option<String> {
    let rows = top_roles_by_mean(subset.iter(), limit);
    (!rows.is_empty()).then(|| bar::bar_chart_svg(&rows, axis_label))
}

pub fn histogram_markup(
    subset: &WorkingSubset,
    bins: usize,
    x_label: &str,
    y_label: &str,
) -> Option<String> {
    salary_histogram(subset.salaries(), bins)
        .map(|hist| histogram::histogram_svg(&hist, x_label, y_label))
}

/// Donut markup plus the shares for the legend list.
pub fn remote_markup(subset: &WorkingSubset) -> Option<(String, Vec<RemoteShare>)> {
    let shares = remote_share(subset.iter());
    (!shares.is_empty()).then(|| (donut::donut_svg(&shares), shares))
}

/// Map markup, or `None` when no record of `role` has a mapped residence.
pub fn map_markup(
    subset: &WorkingSubset,
    role: &str,
    legend_label: &str,
) -> Option<choropleth::MapRender> {
    let means = mean_salary_by_country(subset.iter(), role);
    (!means.is_empty()).then(|| choropleth::choropleth_svg(&means, legend_label))
}

#[component]
pub fn TopRolesChart(subset: WorkingSubset, limit: usize) -> Element {
    let svg = top_roles_markup(&subset, limit, &t!("chart-top-roles-axis"));

    rsx! {
        ChartCard {
            title: t!("chart-top-roles-title", count = limit),
            empty_message: t!("chart-top-roles-empty"),
            is_empty: svg.is_none(),
            modifier: "dashboard-chart--bar",
            if let Some(svg) = &svg {
                div { class: "dashboard-chart__canvas", dangerous_inner_html: "{svg}" }
            }
        }
    }
}

#[component]
pub fn SalaryHistogramChart(subset: WorkingSubset, bins: usize) -> Element {
    let svg = histogram_markup(
        &subset,
        bins,
        &t!("chart-histogram-axis"),
        &t!("chart-histogram-count"),
    );

    rsx! {
        ChartCard {
            title: t!("chart-histogram-title"),
            empty_message: t!("chart-histogram-empty"),
            is_empty: svg.is_none(),
            modifier: "dashboard-chart--histogram",
            if let Some(svg) = &svg {
                div { class: "dashboard-chart__canvas", dangerous_inner_html: "{svg}" }
            }
        }
    }
}

#[component]
pub fn RemoteDonutChart(subset: WorkingSubset) -> Element {
    let markup = remote_markup(&subset);

    rsx! {
        ChartCard {
            title: t!("chart-remote-title"),
            empty_message: t!("chart-remote-empty"),
            is_empty: markup.is_none(),
            modifier: "dashboard-chart--donut",
            if let Some((svg, shares)) = &markup {
                div { class: "dashboard-chart__donut",
                    div { class: "dashboard-chart__canvas", dangerous_inner_html: "{svg}" }
                    ul { class: "dashboard-chart__legend",
                        for (idx, slice) in shares.iter().enumerate() {
                            li { key: "{slice.category}", class: "dashboard-chart__legend-item",
                                span {
                                    class: "dashboard-chart__legend-swatch",
                                    style: "background:{donut::slice_color(idx)}",
                                }
                                span { class: "dashboard-chart__legend-label", "{slice.category}" }
                                span { class: "dashboard-chart__legend-value",
                                    "{format::format_percent(slice.share)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CountryMapChart(subset: WorkingSubset, role: String) -> Element {
    let render = map_markup(&subset, &role, &t!("chart-map-legend"));
    // Rows exist but none for the mapped role: say which role is missing.
    let empty_message = if subset.is_empty() {
        t!("chart-map-empty")
    } else {
        t!("chart-map-no-role", role = role.clone())
    };

    rsx! {
        ChartCard {
            title: t!("chart-map-title", role = role.clone()),
            empty_message: empty_message,
            is_empty: render.is_none(),
            modifier: "dashboard-chart--map",
            if let Some(render) = &render {
                div { class: "dashboard-chart__canvas", dangerous_inner_html: render.svg.clone() }
                if !render.unplaced.is_empty() {
                    p { class: "dashboard-chart__note",
                        {t!("chart-map-unplaced")}
                        for iso3 in render.unplaced.iter().copied() {
                            span { key: "{iso3}", class: "dashboard-chart__note-item",
                                " {country::country_name(iso3).unwrap_or(iso3)}"
                            }
                        }
                    }
                }
            }
        }
    }
}
