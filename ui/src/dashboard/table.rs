//! Paginated view of the filtered records, one column per CSV field.

use dioxus::prelude::*;

use crate::data::{WorkingSubset, COLUMNS};
use crate::t;

pub const PAGE_SIZE: usize = 100;

/// Number of pages needed for `rows` records; at least one.
pub fn page_count(rows: usize) -> usize {
    rows.div_ceil(PAGE_SIZE).max(1)
}

#[component]
pub fn DetailTable(subset: WorkingSubset) -> Element {
    let mut page = use_signal(|| 0usize);
    let pages = page_count(subset.len());
    // The subset can shrink under the current page when filters change.
    let current = page().min(pages - 1);
    let display_page = current + 1;

    let rows: Vec<_> = subset
        .iter()
        .skip(current * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect();
    let first_row = current * PAGE_SIZE;

    rsx! {
        div { class: "detail-table",
            p { class: "detail-table__caption",
                {t!("table-caption", count = subset.len())}
            }
            div { class: "detail-table__scroll",
                table { class: "detail-table__table",
                    thead {
                        tr {
                            for column in COLUMNS {
                                th { key: "{column}", scope: "col", "{column}" }
                            }
                        }
                    }
                    tbody {
                        for (offset, record) in rows.into_iter().enumerate() {
                            tr { key: "{first_row + offset}",
                                td { "{record.year}" }
                                td { "{record.seniority}" }
                                td { "{record.contract}" }
                                td { "{record.company_size}" }
                                td { "{record.role}" }
                                td { "{record.residence}" }
                                td { "{record.remote}" }
                                td { class: "detail-table__number", "{record.salary_usd}" }
                            }
                        }
                    }
                }
            }
            if pages > 1 {
                div { class: "detail-table__pager",
                    button {
                        r#type: "button",
                        class: "button button--ghost button--small",
                        disabled: current == 0,
                        onclick: move |_| page.set(current.saturating_sub(1)),
                        {t!("table-prev")}
                    }
                    span { class: "detail-table__page",
                        {t!("table-page", page = display_page, pages = pages)}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost button--small",
                        disabled: display_page == pages,
                        onclick: move |_| page.set((current + 1).min(pages - 1)),
                        {t!("table-next")}
                    }
                }
            }
        }
    }
}
