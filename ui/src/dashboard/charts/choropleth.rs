//! World choropleth of mean salary per residence country.
//!
//! Country outlines are projected equirectangularly and filled along the
//! red-yellow-green scale from the lowest to the highest country mean.
//! Countries without a value keep a neutral land fill. Countries too small to
//! carry an outline are drawn as a dot at their centroid.

use std::collections::HashMap;
use std::fmt::Write as _;

use super::scale::{escape, rdylgn, RDYLGN};
use crate::analytics::CountryMean;
use crate::core::format;
use crate::data::country::{self, CountryOutline};

const MAP_W: f64 = 720.0;
const MAP_H: f64 = 360.0;
const LEGEND_H: f64 = 48.0;
const GRATICULE_DEG: i32 = 30;
const DOT_RADIUS: f64 = 3.5;

/// Rendered map plus the countries that had neither an outline nor a
/// centroid to place them at.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRender {
    pub svg: String,
    pub unplaced: Vec<&'static str>,
}

fn project(lat: f64, lon: f64) -> (f64, f64) {
    ((lon + 180.0) / 360.0 * MAP_W, (90.0 - lat) / 180.0 * MAP_H)
}

/// SVG path data for every ring of `outline`.
fn outline_path(outline: &CountryOutline) -> String {
    let mut d = String::new();
    for ring in &outline.rings {
        for (idx, (lon, lat)) in ring.iter().enumerate() {
            let (x, y) = project(*lat, *lon);
            let cmd = if idx == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{x:.1} {y:.1}");
        }
        d.push('Z');
    }
    d
}

fn tooltip(entry: &CountryMean) -> String {
    let name = country::country_name(entry.iso3).unwrap_or(entry.iso3);
    format!(
        "<title>{name} ({iso3}): {mean} · n={count}</title>",
        name = escape(name),
        iso3 = entry.iso3,
        mean = escape(&format::format_usd(entry.mean_salary)),
        count = format::format_count(entry.count),
    )
}

pub fn choropleth_svg(means: &[CountryMean], legend_label: &str) -> MapRender {
    let low = means
        .iter()
        .map(|m| m.mean_salary)
        .fold(f64::INFINITY, f64::min);
    let high = means
        .iter()
        .map(|m| m.mean_salary)
        .fold(f64::NEG_INFINITY, f64::max);
    let position = |value: f64| {
        if high > low {
            (value - low) / (high - low)
        } else {
            0.5
        }
    };
    let by_iso3: HashMap<&str, &CountryMean> = means.iter().map(|m| (m.iso3, m)).collect();

    let total_h = MAP_H + LEGEND_H;
    let mut svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' class='chart-svg chart-svg--map' viewBox='0 0 {MAP_W} {total_h}' role='img'>\
         <defs><linearGradient id='map-scale' x1='0' x2='1' y1='0' y2='0'>"
    );
    for (idx, (r, g, b)) in RDYLGN.iter().enumerate() {
        let stop = idx as f64 / (RDYLGN.len() - 1) as f64 * 100.0;
        let _ = write!(
            svg,
            "<stop offset='{stop:.0}%' stop-color='#{r:02x}{g:02x}{b:02x}'/>"
        );
    }
    svg.push_str("</linearGradient></defs>");
    let _ = write!(
        svg,
        "<rect class='chart-map__ocean' x='0' y='0' width='{MAP_W}' height='{MAP_H}'/>"
    );

    for lon in (-180..=180).step_by(GRATICULE_DEG as usize) {
        let (x, _) = project(0.0, lon as f64);
        let _ = write!(
            svg,
            "<line class='chart-map__graticule' x1='{x:.1}' y1='0' x2='{x:.1}' y2='{MAP_H}'/>"
        );
    }
    for lat in (-90..=90).step_by(GRATICULE_DEG as usize) {
        let (_, y) = project(lat as f64, 0.0);
        let _ = write!(
            svg,
            "<line class='chart-map__graticule' x1='0' y1='{y:.1}' x2='{MAP_W}' y2='{y:.1}'/>"
        );
    }

    for outline in country::outlines() {
        let d = outline_path(outline);
        match by_iso3.get(outline.iso3.as_str()) {
            Some(entry) => {
                let _ = write!(
                    svg,
                    "<path class='chart-map__country' data-iso3='{iso3}' d='{d}' fill='{fill}'>{title}</path>",
                    iso3 = entry.iso3,
                    fill = rdylgn(position(entry.mean_salary)),
                    title = tooltip(entry),
                );
            }
            None => {
                let _ = write!(
                    svg,
                    "<path class='chart-map__land' data-iso3='{iso3}' d='{d}'/>",
                    iso3 = outline.iso3,
                );
            }
        }
    }

    let mut unplaced = Vec::new();
    for entry in means {
        if country::outline(entry.iso3).is_some() {
            continue;
        }
        let Some((lat, lon)) = country::centroid(entry.iso3) else {
            unplaced.push(entry.iso3);
            continue;
        };
        let (x, y) = project(lat, lon);
        let _ = write!(
            svg,
            "<circle class='chart-map__country chart-map__country--dot' data-iso3='{iso3}' cx='{x:.1}' cy='{y:.1}' r='{DOT_RADIUS}' fill='{fill}'>{title}</circle>",
            iso3 = entry.iso3,
            fill = rdylgn(position(entry.mean_salary)),
            title = tooltip(entry),
        );
    }
    unplaced.sort_unstable();

    if !means.is_empty() {
        let bar_x = MAP_W * 0.25;
        let bar_w = MAP_W * 0.5;
        let bar_y = MAP_H + 10.0;
        let _ = write!(
            svg,
            "<rect class='chart-map__legend' x='{bar_x:.1}' y='{bar_y:.1}' width='{bar_w:.1}' height='10' fill='url(#map-scale)'/>\
             <text class='chart-tick' x='{bar_x:.1}' y='{ty:.1}' text-anchor='start'>{low}</text>\
             <text class='chart-axis-label' x='{mid:.1}' y='{ty:.1}' text-anchor='middle'>{label}</text>\
             <text class='chart-tick' x='{end:.1}' y='{ty:.1}' text-anchor='end'>{high}</text>",
            ty = bar_y + 26.0,
            low = escape(&format::format_compact_usd(low)),
            mid = bar_x + bar_w / 2.0,
            label = escape(legend_label),
            end = bar_x + bar_w,
            high = escape(&format::format_compact_usd(high)),
        );
    }

    svg.push_str("</svg>");
    MapRender { svg, unplaced }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean(iso3: &'static str, mean_salary: f64, count: usize) -> CountryMean {
        CountryMean {
            iso3,
            mean_salary,
            count,
        }
    }

    /// Markup of the element tagged with `data-iso3='{iso3}'`, up to its
    /// closing tag.
    fn region<'a>(svg: &'a str, iso3: &str) -> &'a str {
        let attr = format!("data-iso3='{iso3}'");
        let start = svg.find(&attr).unwrap_or_else(|| panic!("{iso3} not drawn"));
        let rest = &svg[start..];
        let end = ["</path>", "/>", "</circle>"]
            .iter()
            .filter_map(|close| rest.find(close).map(|at| at + close.len()))
            .min()
            .expect("element closes");
        &rest[..end]
    }

    #[test]
    fn projection_corners() {
        assert_eq!(project(90.0, -180.0), (0.0, 0.0));
        assert_eq!(project(-90.0, 180.0), (MAP_W, MAP_H));
        assert_eq!(project(0.0, 0.0), (MAP_W / 2.0, MAP_H / 2.0));
    }

    #[test]
    fn countries_with_values_are_filled_regions() {
        let render = choropleth_svg(
            &[mean("USA", 150_000.0, 10), mean("BRA", 30_000.0, 2)],
            "Mean salary (USD)",
        );
        assert!(render.unplaced.is_empty());
        assert_eq!(render.svg.matches("class='chart-map__country'").count(), 2);

        let usa = region(&render.svg, "USA");
        assert!(usa.starts_with("data-iso3='USA' d='M"));
        assert!(usa.contains(&format!("fill='{}'", rdylgn(1.0))));
        assert!(usa.contains("<title>"));

        let brazil = region(&render.svg, "BRA");
        assert!(brazil.contains(&format!("fill='{}'", rdylgn(0.0))));
    }

    #[test]
    fn every_outline_is_drawn_once() {
        let render = choropleth_svg(&[mean("DEU", 80_000.0, 3)], "legend");
        let regions = render.svg.matches("<path ").count();
        assert_eq!(regions, country::outlines().len());
        assert_eq!(render.svg.matches("data-iso3='DEU'").count(), 1);
    }

    #[test]
    fn countries_without_values_keep_neutral_land() {
        let render = choropleth_svg(&[mean("USA", 100_000.0, 1)], "legend");
        assert!(render
            .svg
            .contains("<path class='chart-map__land' data-iso3='CAN'"));
        assert!(!region(&render.svg, "CAN").contains("fill="));
    }

    #[test]
    fn multipolygon_countries_draw_every_ring() {
        let render = choropleth_svg(&[mean("JPN", 60_000.0, 4)], "legend");
        let japan = region(&render.svg, "JPN");
        assert_eq!(japan.matches('M').count(), 4);
        assert_eq!(japan.matches('Z').count(), 4);
    }

    #[test]
    fn small_countries_fall_back_to_a_dot() {
        let render = choropleth_svg(
            &[mean("SGP", 90_000.0, 2), mean("USA", 120_000.0, 5)],
            "legend",
        );
        assert!(render.unplaced.is_empty());
        let singapore = region(&render.svg, "SGP");
        assert!(singapore.contains("cx='"));
        assert!(singapore.contains(&format!("fill='{}'", rdylgn(0.0))));
    }

    #[test]
    fn countries_without_outline_or_centroid_are_reported() {
        let render = choropleth_svg(&[mean("ATA", 1.0, 1), mean("USA", 2.0, 1)], "legend");
        assert_eq!(render.unplaced, vec!["ATA"]);
        assert_eq!(render.svg.matches("class='chart-map__country'").count(), 1);
    }

    #[test]
    fn empty_input_draws_a_neutral_map() {
        let render = choropleth_svg(&[], "legend");
        assert!(render.unplaced.is_empty());
        assert!(!render.svg.contains("chart-map__country"));
        assert!(render.svg.contains("chart-map__land"));
        assert!(!render.svg.contains("inf"));
        assert!(!render.svg.contains("map-scale)'"));
    }
}
