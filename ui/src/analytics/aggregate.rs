//! Chart aggregations. Each takes the records of a working subset and
//! returns plain rows the chart components draw directly.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::data::{country, SalaryRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct RoleMean {
    pub role: String,
    pub mean_salary: f64,
    pub count: usize,
}

/// The `limit` roles with the highest mean salary, ordered ascending. The bar
/// chart stacks them bottom-up so the best-paid role sits on top.
pub fn top_roles_by_mean<'a, I>(records: I, limit: usize) -> Vec<RoleMean>
where
    I: IntoIterator<Item = &'a SalaryRecord>,
{
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.role.as_str()).or_default();
        entry.0 += record.salary_usd;
        entry.1 += 1;
    }

    let mut rows: Vec<RoleMean> = groups
        .into_iter()
        .map(|(role, (total, count))| RoleMean {
            role: role.to_string(),
            mean_salary: total / count as f64,
            count,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.mean_salary
            .partial_cmp(&a.mean_salary)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.role.cmp(&b.role))
    });
    rows.truncate(limit);
    rows.reverse();
    rows
}

/// Equal-width bins over `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// `(lower, upper)` edges of bin `idx`.
    pub fn bin_edges(&self, idx: usize) -> (f64, f64) {
        let lower = self.min + self.bin_width * idx as f64;
        (lower, lower + self.bin_width)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn peak(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Bucket salaries into `bins` equal-width bins. The maximum lands in the
/// last bin; when every value is equal a single bin holds them all.
/// Returns `None` for no (finite) values or zero bins.
pub fn salary_histogram<I>(salaries: I, bins: usize) -> Option<Histogram>
where
    I: IntoIterator<Item = f64>,
{
    if bins == 0 {
        return None;
    }

    let values: Vec<f64> = salaries.into_iter().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min >= max {
        return Some(Histogram {
            min,
            max,
            bin_width: 0.0,
            counts: vec![values.len()],
        });
    }

    let bin_width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in values {
        let idx = ((value - min) / bin_width).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    Some(Histogram {
        min,
        max,
        bin_width,
        counts,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteShare {
    pub category: String,
    pub count: usize,
    /// Fraction of the subset, in `[0, 1]`.
    pub share: f64,
}

/// Record count per remote-work category, largest first.
pub fn remote_share<'a, I>(records: I) -> Vec<RemoteShare>
where
    I: IntoIterator<Item = &'a SalaryRecord>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.remote.as_str()).or_default() += 1;
    }
    let total: usize = counts.values().sum();

    let mut rows: Vec<RemoteShare> = counts
        .into_iter()
        .map(|(category, count)| RemoteShare {
            category: category.to_string(),
            count,
            share: count as f64 / total as f64,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    rows
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryMean {
    pub iso3: &'static str,
    pub mean_salary: f64,
    pub count: usize,
}

/// `(iso3, salary)` pairs for records of `role` whose residence maps to an
/// ISO-3 code. Unmapped residences are dropped here.
pub fn country_salaries<'a, I>(records: I, role: &str) -> Vec<(&'static str, f64)>
where
    I: IntoIterator<Item = &'a SalaryRecord>,
{
    let mut unmapped: BTreeSet<&str> = BTreeSet::new();
    let pairs: Vec<(&'static str, f64)> = records
        .into_iter()
        .filter(|record| record.role == role)
        .filter_map(|record| match country::iso2_to_iso3(&record.residence) {
            Some(iso3) => Some((iso3, record.salary_usd)),
            None => {
                unmapped.insert(record.residence.as_str());
                None
            }
        })
        .collect();

    if !unmapped.is_empty() {
        debug!(?unmapped, "residence codes without an ISO-3 mapping");
    }
    pairs
}

/// Mean salary of `role` per residence country, ordered by ISO-3 code.
pub fn mean_salary_by_country<'a, I>(records: I, role: &str) -> Vec<CountryMean>
where
    I: IntoIterator<Item = &'a SalaryRecord>,
{
    let mut groups: BTreeMap<&'static str, (f64, usize)> = BTreeMap::new();
    for (iso3, salary) in country_salaries(records, role) {
        let entry = groups.entry(iso3).or_default();
        entry.0 += salary;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(iso3, (total, count))| CountryMean {
            iso3,
            mean_salary: total / count as f64,
            count,
        })
        .collect()
}
