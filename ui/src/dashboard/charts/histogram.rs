//! Salary distribution as adjacent vertical bars.

use super::scale::{escape, ticks};
use crate::analytics::Histogram;
use crate::core::format;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const LEFT: f64 = 52.0;
const RIGHT: f64 = 16.0;
const TOP: f64 = 12.0;
const BOTTOM: f64 = 48.0;

pub fn histogram_svg(hist: &Histogram, x_label: &str, y_label: &str) -> String {
    let plot_w = WIDTH - LEFT - RIGHT;
    let plot_h = HEIGHT - TOP - BOTTOM;
    let base_y = TOP + plot_h;

    // A zero-width histogram is drawn as one bar spanning a unit range
    // centred on the shared value.
    let (lo, hi) = if hist.bin_width > 0.0 {
        (hist.min, hist.max)
    } else {
        let pad = (hist.min.abs() * 0.05).max(1.0);
        (hist.min - pad, hist.max + pad)
    };
    let x_of = |value: f64| LEFT + plot_w * (value - lo) / (hi - lo);

    let peak = hist.peak().max(1) as f64;
    let y_ticks = ticks(0.0, peak, 4);
    let y_max = y_ticks.last().copied().unwrap_or(peak).max(peak);
    let y_of = |count: f64| base_y - plot_h * count / y_max;

    let mut svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' class='chart-svg chart-svg--histogram' viewBox='0 0 {WIDTH} {HEIGHT}' role='img'>"
    );

    for tick in &y_ticks {
        let y = y_of(*tick);
        svg.push_str(&format!(
            "<line class='chart-grid' x1='{LEFT}' y1='{y:.1}' x2='{:.1}' y2='{y:.1}'/>\
             <text class='chart-tick' x='{:.1}' y='{:.1}' text-anchor='end'>{}</text>",
            WIDTH - RIGHT,
            LEFT - 6.0,
            y + 4.0,
            format::format_count(*tick as usize),
        ));
    }

    for tick in ticks(lo, hi, 5) {
        let x = x_of(tick);
        svg.push_str(&format!(
            "<text class='chart-tick' x='{x:.1}' y='{:.1}' text-anchor='middle'>{}</text>",
            base_y + 16.0,
            escape(&format::format_compact_usd(tick)),
        ));
    }

    for (idx, &count) in hist.counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let (lower, upper) = if hist.bin_width > 0.0 {
            hist.bin_edges(idx)
        } else {
            (lo, hi)
        };
        let x = x_of(lower);
        let w = (x_of(upper) - x - 1.0).max(1.0);
        let y = y_of(count as f64);
        svg.push_str(&format!(
            "<rect class='chart-histogram__bin' x='{x:.1}' y='{y:.1}' width='{w:.1}' height='{:.1}'>\
             <title>{} – {}: {}</title></rect>",
            base_y - y,
            escape(&format::format_usd(lower)),
            escape(&format::format_usd(upper)),
            format::format_count(count),
        ));
    }

    svg.push_str(&format!(
        "<line class='chart-axis' x1='{LEFT}' y1='{base_y:.1}' x2='{:.1}' y2='{base_y:.1}'/>\
         <text class='chart-axis-label' x='{:.1}' y='{:.1}' text-anchor='middle'>{}</text>\
         <text class='chart-axis-label' x='14' y='{:.1}' text-anchor='middle' transform='rotate(-90 14 {:.1})'>{}</text>\
         </svg>",
        WIDTH - RIGHT,
        LEFT + plot_w / 2.0,
        HEIGHT - 8.0,
        escape(x_label),
        TOP + plot_h / 2.0,
        TOP + plot_h / 2.0,
        escape(y_label),
    ));
    svg
}
