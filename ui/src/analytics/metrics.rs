//! Headline metrics shown in the four cards.

use std::collections::BTreeMap;

use crate::data::{SalaryRecord, WorkingSubset};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryMetrics {
    pub mean_salary: f64,
    pub max_salary: f64,
    pub record_count: usize,
    /// Most frequent role; ties resolve to the first role in sort order.
    pub top_role: String,
}

impl SummaryMetrics {
    /// All-zero metrics, used when no record passes the filters.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_subset(subset: &WorkingSubset) -> Self {
        Self::from_records(subset.iter())
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SalaryRecord>,
    {
        let mut record_count = 0usize;
        let mut total = 0.0;
        let mut max_salary = f64::NEG_INFINITY;
        let mut role_counts: BTreeMap<&str, usize> = BTreeMap::new();

        for record in records {
            record_count += 1;
            total += record.salary_usd;
            max_salary = max_salary.max(record.salary_usd);
            *role_counts.entry(record.role.as_str()).or_default() += 1;
        }

        if record_count == 0 {
            return Self::empty();
        }

        let mut top_role = "";
        let mut top_count = 0usize;
        for (role, count) in role_counts {
            if count > top_count {
                top_role = role;
                top_count = count;
            }
        }

        Self {
            mean_salary: total / record_count as f64,
            max_salary,
            record_count,
            top_role: top_role.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(role: &str, salary_usd: f64) -> SalaryRecord {
        SalaryRecord {
            year: 2024,
            seniority: "senior".into(),
            contract: "integral".into(),
            company_size: "media".into(),
            role: role.into(),
            residence: "US".into(),
            remote: "remoto".into(),
            salary_usd,
        }
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let metrics = SummaryMetrics::from_records(std::iter::empty());
        assert_eq!(metrics.mean_salary, 0.0);
        assert_eq!(metrics.max_salary, 0.0);
        assert_eq!(metrics.record_count, 0);
        assert_eq!(metrics.top_role, "");
    }

    #[test]
    fn computes_mean_max_count_and_mode() {
        let records = vec![
            record("Data Engineer", 100_000.0),
            record("Data Scientist", 150_000.0),
            record("Data Engineer", 80_000.0),
        ];
        let metrics = SummaryMetrics::from_records(&records);
        assert_eq!(metrics.record_count, 3);
        assert_eq!(metrics.max_salary, 150_000.0);
        assert!((metrics.mean_salary - 110_000.0).abs() < 1e-9);
        assert_eq!(metrics.top_role, "Data Engineer");
    }

    #[test]
    fn mode_ties_pick_first_in_sort_order() {
        let records = vec![
            record("ML Engineer", 1.0),
            record("Analytics Engineer", 2.0),
            record("ML Engineer", 3.0),
            record("Analytics Engineer", 4.0),
        ];
        let metrics = SummaryMetrics::from_records(&records);
        assert_eq!(metrics.top_role, "Analytics Engineer");
    }

    #[test]
    fn mean_lies_between_min_and_max() {
        let records: Vec<_> = [12_000.0, 480_000.0, 95_500.0, 61_250.0]
            .into_iter()
            .map(|salary| record("Data Analyst", salary))
            .collect();
        let metrics = SummaryMetrics::from_records(&records);
        assert!(metrics.mean_salary >= 12_000.0);
        assert!(metrics.mean_salary <= metrics.max_salary);
    }
}
