//! Axis ticks, colour scales and SVG text helpers shared by the chart builders.

/// Categorical palette for slices.
pub const PALETTE: [&str; 8] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
];

/// Red-yellow-green diverging scale (ColorBrewer RdYlGn, 11 classes).
pub const RDYLGN: [(u8, u8, u8); 11] = [
    (0xa5, 0x00, 0x26),
    (0xd7, 0x30, 0x27),
    (0xf4, 0x6d, 0x43),
    (0xfd, 0xae, 0x61),
    (0xfe, 0xe0, 0x8b),
    (0xff, 0xff, 0xbf),
    (0xd9, 0xef, 0x8b),
    (0xa6, 0xd9, 0x6a),
    (0x66, 0xbd, 0x63),
    (0x1a, 0x98, 0x50),
    (0x00, 0x68, 0x37),
];

/// Colour at position `t` in `[0, 1]` along [`RDYLGN`], as `#rrggbb`.
pub fn rdylgn(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
    let scaled = t * (RDYLGN.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(RDYLGN.len() - 1);
    let weight = scaled - lower as f64;

    let mix = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * weight).round() as u8 };
    let (r0, g0, b0) = RDYLGN[lower];
    let (r1, g1, b1) = RDYLGN[upper];
    format!("#{:02x}{:02x}{:02x}", mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Tick spacing giving roughly `target` intervals over `span`; always
/// 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Multiples of [`nice_step`] inside `[min, max]`.
pub fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max < min {
        return Vec::new();
    }
    if max == min {
        return vec![min];
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Escape text for use inside SVG markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Shorten `label` to at most `max_chars` characters, ending in `…` when cut.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
