//! Formatting helpers for presenting salaries and counts.

/// `$12,345.67`
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Axis-tick label: `$950`, `$120k`, `$1.2M`.
pub fn format_compact_usd(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${:.0}k", value / 1_000.0)
    } else {
        format!("${value:.0}")
    }
}

pub fn format_count(value: usize) -> String {
    group_thousands(value as u64)
}

/// `share` is a fraction in `[0, 1]`.
pub fn format_percent(share: f64) -> String {
    if share.is_finite() {
        format!("{:.1}%", share * 100.0)
    } else {
        "—".to_string()
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_uses_separators_and_cents() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.5), "$999.50");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(-1500.0), "-$1,500.00");
        assert_eq!(format_usd(f64::NAN), "—");
    }

    #[test]
    fn compact_usd_picks_a_unit() {
        assert_eq!(format_compact_usd(950.0), "$950");
        assert_eq!(format_compact_usd(120_000.0), "$120k");
        assert_eq!(format_compact_usd(1_240_000.0), "$1.2M");
    }

    #[test]
    fn counts_and_percentages() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(133_349), "133,349");
        assert_eq!(format_percent(0.5), "50.0%");
        assert_eq!(format_percent(f64::INFINITY), "—");
    }
}
