//! Ring chart of remote-work shares.

use std::f64::consts::PI;

use super::scale::{escape, PALETTE};
use crate::analytics::RemoteShare;
use crate::core::format;

const SIZE: f64 = 320.0;
const RADIUS: f64 = 96.0;
const STROKE: f64 = 64.0;
/// Slices below this share get no inline percentage.
const MIN_LABEL_SHARE: f64 = 0.05;

/// Colour assigned to the slice at `idx`; the legend reuses it.
pub fn slice_color(idx: usize) -> &'static str {
    PALETTE[idx % PALETTE.len()]
}

/// Slices are circles with a dash pattern covering their arc, rotated so the
/// first one starts at twelve o'clock.
pub fn donut_svg(shares: &[RemoteShare]) -> String {
    let centre = SIZE / 2.0;
    let circumference = 2.0 * PI * RADIUS;

    let mut svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' class='chart-svg chart-svg--donut' viewBox='0 0 {SIZE} {SIZE}' role='img'>\
         <g transform='rotate(-90 {centre} {centre})'>"
    );

    let mut offset = 0.0;
    let mut labels = String::new();
    for (idx, slice) in shares.iter().enumerate() {
        let length = circumference * slice.share;
        svg.push_str(&format!(
            "<circle class='chart-donut__slice' cx='{centre}' cy='{centre}' r='{RADIUS}' fill='none' \
             stroke='{color}' stroke-width='{STROKE}' stroke-dasharray='{length:.3} {gap:.3}' \
             stroke-dashoffset='{dash_offset:.3}'><title>{title}: {count} ({pct})</title></circle>",
            color = slice_color(idx),
            gap = (circumference - length).max(0.0),
            dash_offset = -offset,
            title = escape(&slice.category),
            count = format::format_count(slice.count),
            pct = format::format_percent(slice.share),
        ));

        if slice.share >= MIN_LABEL_SHARE {
            // Midpoint angle measured clockwise from twelve o'clock.
            let angle = 2.0 * PI * (offset + length / 2.0) / circumference;
            let x = centre + RADIUS * angle.sin();
            let y = centre - RADIUS * angle.cos();
            labels.push_str(&format!(
                "<text class='chart-donut__label' x='{x:.1}' y='{:.1}' text-anchor='middle'>{}</text>",
                y + 4.0,
                format::format_percent(slice.share),
            ));
        }
        offset += length;
    }

    svg.push_str("</g>");
    svg.push_str(&labels);
    svg.push_str("</svg>");
    svg
}
