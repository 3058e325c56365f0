//! Filter sidebar: one checkbox group per filter column.

use dioxus::prelude::*;

use crate::data::{FilterColumn, FilterOptions, FilterSelection};
use crate::t;

fn column_label(column: FilterColumn) -> String {
    match column {
        FilterColumn::Year => t!("filter-year"),
        FilterColumn::Seniority => t!("filter-seniority"),
        FilterColumn::Contract => t!("filter-contract"),
        FilterColumn::CompanySize => t!("filter-company-size"),
    }
}

#[component]
pub fn FilterSidebar(options: FilterOptions, selection: Signal<FilterSelection>) -> Element {
    rsx! {
        aside { class: "dashboard-sidebar",
            h2 { class: "dashboard-sidebar__title", {t!("filters-header")} }
            for column in FilterColumn::ALL {
                FilterGroup {
                    key: "{column.slug()}",
                    column,
                    options: options.clone(),
                    selection,
                }
            }
        }
    }
}

#[component]
fn FilterGroup(
    column: FilterColumn,
    options: FilterOptions,
    selection: Signal<FilterSelection>,
) -> Element {
    let mut selection = selection;
    let labels = options.labels(column);
    let total = labels.len();
    let selected = selection.read().selected_count(column);
    let slug = column.slug();

    let all_options = options.clone();
    let select_all = move |_| selection.write().select_all(column, &all_options);
    let clear = move |_| selection.write().clear(column);

    rsx! {
        fieldset { class: "filter-group filter-group--{slug}",
            legend { class: "filter-group__legend",
                span { class: "filter-group__label", {column_label(column)} }
                span { class: "filter-group__count",
                    {t!("filter-selected-count", selected = selected, total = total)}
                }
            }
            div { class: "filter-group__actions",
                button {
                    r#type: "button",
                    class: "button button--ghost button--small",
                    disabled: selected == total,
                    onclick: select_all,
                    {t!("filter-select-all")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost button--small",
                    disabled: selected == 0,
                    onclick: clear,
                    {t!("filter-clear")}
                }
            }
            ul { class: "filter-group__options",
                for (idx, label) in labels.into_iter().enumerate() {
                    li { key: "{label}", class: "filter-group__option",
                        input {
                            id: "filter-{slug}-{idx}",
                            r#type: "checkbox",
                            checked: selection.read().is_selected(column, &label),
                            onchange: {
                                let label = label.clone();
                                move |_| {
                                    let now = !selection.read().is_selected(column, &label);
                                    selection.write().set(column, &label, now);
                                }
                            },
                        }
                        label { r#for: "filter-{slug}-{idx}", "{label}" }
                    }
                }
            }
        }
    }
}
