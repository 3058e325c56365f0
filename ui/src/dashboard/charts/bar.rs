//! Horizontal bar chart of mean salary per role.

use super::scale::{escape, nice_step, truncate_label};
use crate::analytics::RoleMean;
use crate::core::format;

const WIDTH: f64 = 640.0;
const LABEL_COL: f64 = 190.0;
const VALUE_COL: f64 = 70.0;
const ROW_H: f64 = 28.0;
const BAR_H: f64 = 18.0;
const TOP: f64 = 8.0;
const BOTTOM: f64 = 44.0;

/// Render `rows` (ascending by mean) with the best-paid role on top.
pub fn bar_chart_svg(rows: &[RoleMean], axis_label: &str) -> String {
    let plot_w = WIDTH - LABEL_COL - VALUE_COL;
    let height = TOP + ROW_H * rows.len() as f64 + BOTTOM;
    let peak = rows
        .iter()
        .map(|row| row.mean_salary)
        .fold(0.0_f64, f64::max);
    let step = nice_step(peak, 4);
    let axis_max = if peak > 0.0 {
        (peak / step).ceil() * step
    } else {
        1.0
    };
    let x_of = |value: f64| LABEL_COL + plot_w * (value / axis_max);

    let mut svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' class='chart-svg chart-svg--bar' viewBox='0 0 {WIDTH} {height}' role='img'>"
    );

    let mut tick = 0.0;
    while tick <= axis_max + step * 1e-9 {
        let x = x_of(tick);
        svg.push_str(&format!(
            "<line class='chart-grid' x1='{x:.1}' y1='{TOP}' x2='{x:.1}' y2='{:.1}'/>\
             <text class='chart-tick' x='{x:.1}' y='{:.1}' text-anchor='middle'>{}</text>",
            height - BOTTOM,
            height - BOTTOM + 16.0,
            escape(&format::format_compact_usd(tick)),
        ));
        tick += step;
    }

    // Highest mean is the last row; draw it first (top).
    for (slot, row) in rows.iter().rev().enumerate() {
        let y = TOP + ROW_H * slot as f64;
        let bar_y = y + (ROW_H - BAR_H) / 2.0;
        let bar_w = (x_of(row.mean_salary) - LABEL_COL).max(1.0);
        let label_y = y + ROW_H / 2.0 + 4.0;
        let value = format::format_compact_usd(row.mean_salary);
        svg.push_str(&format!(
            "<g class='chart-bar'>\
             <title>{title}: {exact} ({count})</title>\
             <text class='chart-label' x='{lx:.1}' y='{label_y:.1}' text-anchor='end'>{label}</text>\
             <rect class='chart-bar__fill' x='{LABEL_COL}' y='{bar_y:.1}' width='{bar_w:.1}' height='{BAR_H}' rx='3'/>\
             <text class='chart-value' x='{vx:.1}' y='{label_y:.1}'>{value}</text>\
             </g>",
            title = escape(&row.role),
            exact = escape(&format::format_usd(row.mean_salary)),
            count = row.count,
            lx = LABEL_COL - 8.0,
            label = escape(&truncate_label(&row.role, 26)),
            vx = LABEL_COL + bar_w + 6.0,
            value = escape(&value),
        ));
    }

    svg.push_str(&format!(
        "<text class='chart-axis-label' x='{:.1}' y='{:.1}' text-anchor='middle'>{}</text></svg>",
        LABEL_COL + plot_w / 2.0,
        height - 6.0,
        escape(axis_label),
    ));
    svg
}
