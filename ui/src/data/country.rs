//! ISO 3166-1 lookups for the country map.

use std::collections::HashMap;

use geojson::{Feature, FeatureCollection, Value};
use isocountry::CountryCode;
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::warn;

const WORLD_GEOJSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/world.geojson"
));

const CENTROIDS_CSV: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/centroids.csv"
));

#[derive(Debug, Deserialize)]
struct CentroidRow {
    iso3: String,
    lat: f64,
    lon: f64,
}

static CENTROIDS: Lazy<HashMap<String, (f64, f64)>> = Lazy::new(|| {
    let mut table = HashMap::new();
    let mut rdr = csv::Reader::from_reader(CENTROIDS_CSV.as_bytes());
    for row in rdr.deserialize::<CentroidRow>() {
        match row {
            Ok(row) => {
                table.insert(row.iso3, (row.lat, row.lon));
            }
            Err(err) => warn!(%err, "skipping malformed centroid row"),
        }
    }
    table
});

/// Simplified land outline of one country. Each ring is a closed list of
/// `(lon, lat)` pairs; islands and exclaves are separate rings.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryOutline {
    pub iso3: String,
    pub rings: Vec<Vec<(f64, f64)>>,
}

static OUTLINES: Lazy<Vec<CountryOutline>> = Lazy::new(|| {
    match WORLD_GEOJSON.parse::<FeatureCollection>() {
        Ok(collection) => collection
            .features
            .iter()
            .filter_map(outline_from_feature)
            .collect(),
        Err(err) => {
            warn!(%err, "unable to parse world outlines");
            Vec::new()
        }
    }
});

fn outline_from_feature(feature: &Feature) -> Option<CountryOutline> {
    let Some(iso3) = feature.property("iso3").and_then(|value| value.as_str()) else {
        warn!("skipping outline without an iso3 property");
        return None;
    };
    let ring = |positions: &Vec<Vec<f64>>| -> Vec<(f64, f64)> {
        positions
            .iter()
            .filter_map(|position| match position.as_slice() {
                [lon, lat, ..] => Some((*lon, *lat)),
                _ => None,
            })
            .collect()
    };
    // Holes are dropped: at map scale no country needs one.
    let rings: Vec<Vec<(f64, f64)>> = match feature.geometry.as_ref().map(|g| &g.value) {
        Some(Value::Polygon(polygon)) => polygon.iter().take(1).map(ring).collect(),
        Some(Value::MultiPolygon(polygons)) => polygons
            .iter()
            .filter_map(|polygon| polygon.first())
            .map(ring)
            .collect(),
        _ => {
            warn!(iso3, "skipping outline without polygon geometry");
            return None;
        }
    };

    Some(CountryOutline {
        iso3: iso3.to_string(),
        rings: rings.into_iter().filter(|ring| ring.len() >= 3).collect(),
    })
}

/// Every embedded country outline, ordered by ISO-3 code.
pub fn outlines() -> &'static [CountryOutline] {
    &OUTLINES
}

/// Outline for one alpha-3 code. Micro-states have none and fall back to
/// [`centroid`].
pub fn outline(iso3: &str) -> Option<&'static CountryOutline> {
    OUTLINES.iter().find(|outline| outline.iso3 == iso3)
}

/// Map an alpha-2 residence code to alpha-3. Unknown or malformed codes
/// yield `None`.
pub fn iso2_to_iso3(code: &str) -> Option<&'static str> {
    let normalized = code.trim().to_ascii_uppercase();
    if normalized.len() != 2 {
        return None;
    }
    CountryCode::for_alpha2(&normalized)
        .ok()
        .map(|country| country.alpha3())
}

/// English short name for an alpha-3 code.
pub fn country_name(iso3: &str) -> Option<&'static str> {
    CountryCode::for_alpha3(iso3).ok().map(|country| country.name())
}

/// Approximate geographic centre `(lat, lon)` of a country. Places countries
/// that are too small to have an outline.
pub fn centroid(iso3: &str) -> Option<(f64, f64)> {
    CENTROIDS.get(iso3).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_codes() {
        assert_eq!(iso2_to_iso3("US"), Some("USA"));
        assert_eq!(iso2_to_iso3("BR"), Some("BRA"));
        assert_eq!(iso2_to_iso3("DE"), Some("DEU"));
        assert_eq!(iso2_to_iso3("GB"), Some("GBR"));
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(iso2_to_iso3(" pt "), Some("PRT"));
    }

    #[test]
    fn unknown_codes_are_none() {
        assert_eq!(iso2_to_iso3("ZZ"), None);
        assert_eq!(iso2_to_iso3(""), None);
        assert_eq!(iso2_to_iso3("USA"), None);
    }

    #[test]
    fn centroid_table_covers_common_residences() {
        for iso3 in ["USA", "BRA", "DEU", "GBR", "IND", "CAN", "FRA", "ESP"] {
            let (lat, lon) = centroid(iso3).unwrap_or_else(|| panic!("{iso3} missing"));
            assert!((-90.0..=90.0).contains(&lat));
            assert!((-180.0..=180.0).contains(&lon));
        }
        assert!(centroid("XXX").is_none());
    }

    #[test]
    fn outlines_cover_large_residences() {
        for iso3 in ["USA", "BRA", "DEU", "GBR", "IND", "CAN", "FRA", "ESP", "AUS", "JPN"] {
            let shape = outline(iso3).unwrap_or_else(|| panic!("{iso3} outline missing"));
            assert!(!shape.rings.is_empty());
            for ring in &shape.rings {
                assert!(ring.len() >= 4, "{iso3} ring too short");
                assert_eq!(ring.first(), ring.last(), "{iso3} ring not closed");
                assert!(ring
                    .iter()
                    .all(|(lon, lat)| (-180.0..=180.0).contains(lon) && (-90.0..=90.0).contains(lat)));
            }
        }
        assert!(outline("SGP").is_none());
        assert!(outline("ATA").is_none());
    }

    #[test]
    fn outline_codes_are_real_and_unique() {
        let all = outlines();
        assert!(all.len() > 150);
        assert!(all.windows(2).all(|pair| pair[0].iso3 < pair[1].iso3));
        for shape in all {
            assert!(country_name(&shape.iso3).is_some(), "{} unknown", shape.iso3);
        }
    }

    #[test]
    fn multipolygons_keep_every_island() {
        let japan = outline("JPN").expect("Japan outline");
        assert_eq!(japan.rings.len(), 4);
        let belgium = outline("BEL").expect("Belgium outline");
        assert_eq!(belgium.rings.len(), 1);
    }

    #[test]
    fn names_resolve_for_mapped_codes() {
        let iso3 = iso2_to_iso3("FR").expect("France maps");
        assert_eq!(country_name(iso3), Some("France"));
        assert_eq!(country_name("XXX"), None);
    }
}
