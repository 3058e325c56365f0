//! Filter option sets, user selections and the resulting working subset.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::{Dataset, SalaryRecord};

/// The four columns the sidebar filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterColumn {
    Year,
    Seniority,
    Contract,
    CompanySize,
}

impl FilterColumn {
    pub const ALL: [FilterColumn; 4] = [
        FilterColumn::Year,
        FilterColumn::Seniority,
        FilterColumn::Contract,
        FilterColumn::CompanySize,
    ];

    /// Stable identifier used for element ids and CSS modifiers.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Seniority => "seniority",
            Self::Contract => "contract",
            Self::CompanySize => "company-size",
        }
    }
}

/// Distinct observed values per filter column, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub seniorities: Vec<String>,
    pub contracts: Vec<String>,
    pub company_sizes: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut years = BTreeSet::new();
        let mut seniorities = BTreeSet::new();
        let mut contracts = BTreeSet::new();
        let mut company_sizes = BTreeSet::new();

        for record in dataset.iter() {
            years.insert(record.year);
            seniorities.insert(record.seniority.clone());
            contracts.insert(record.contract.clone());
            company_sizes.insert(record.company_size.clone());
        }

        Self {
            years: years.into_iter().collect(),
            seniorities: seniorities.into_iter().collect(),
            contracts: contracts.into_iter().collect(),
            company_sizes: company_sizes.into_iter().collect(),
        }
    }

    /// Display labels for one column, in option order.
    pub fn labels(&self, column: FilterColumn) -> Vec<String> {
        match column {
            FilterColumn::Year => self.years.iter().map(i32::to_string).collect(),
            FilterColumn::Seniority => self.seniorities.clone(),
            FilterColumn::Contract => self.contracts.clone(),
            FilterColumn::CompanySize => self.company_sizes.clone(),
        }
    }
}

/// The user's current choice for each filter. A record passes when all four
/// of its values are members of the matching set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub years: BTreeSet<i32>,
    pub seniorities: BTreeSet<String>,
    pub contracts: BTreeSet<String>,
    pub company_sizes: BTreeSet<String>,
}

impl FilterSelection {
    /// Every observed value selected; the dashboard's initial state.
    pub fn all(options: &FilterOptions) -> Self {
        Self {
            years: options.years.iter().copied().collect(),
            seniorities: options.seniorities.iter().cloned().collect(),
            contracts: options.contracts.iter().cloned().collect(),
            company_sizes: options.company_sizes.iter().cloned().collect(),
        }
    }

    /// The `saved` choice limited to values present in `options`; everything
    /// when nothing was saved.
    pub fn restore(saved: Option<&FilterSelection>, options: &FilterOptions) -> Self {
        let full = Self::all(options);
        let Some(saved) = saved else {
            return full;
        };
        Self {
            years: full.years.intersection(&saved.years).copied().collect(),
            seniorities: full
                .seniorities
                .intersection(&saved.seniorities)
                .cloned()
                .collect(),
            contracts: full.contracts.intersection(&saved.contracts).cloned().collect(),
            company_sizes: full
                .company_sizes
                .intersection(&saved.company_sizes)
                .cloned()
                .collect(),
        }
    }

    pub fn matches(&self, record: &SalaryRecord) -> bool {
        self.years.contains(&record.year)
            && self.seniorities.contains(&record.seniority)
            && self.contracts.contains(&record.contract)
            && self.company_sizes.contains(&record.company_size)
    }

    pub fn apply(&self, dataset: &Arc<Dataset>) -> WorkingSubset {
        let rows = dataset
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .map(|(idx, _)| idx)
            .collect();
        WorkingSubset {
            dataset: Arc::clone(dataset),
            rows,
        }
    }

    pub fn is_selected(&self, column: FilterColumn, label: &str) -> bool {
        match column {
            FilterColumn::Year => label
                .parse::<i32>()
                .map(|year| self.years.contains(&year))
                .unwrap_or(false),
            FilterColumn::Seniority => self.seniorities.contains(label),
            FilterColumn::Contract => self.contracts.contains(label),
            FilterColumn::CompanySize => self.company_sizes.contains(label),
        }
    }

    /// Add or remove one value. Labels that do not parse for the column are
    /// ignored.
    pub fn set(&mut self, column: FilterColumn, label: &str, selected: bool) {
        fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T, selected: bool) {
            if selected {
                set.insert(value);
            } else {
                set.remove(&value);
            }
        }

        match column {
            FilterColumn::Year => {
                if let Ok(year) = label.parse::<i32>() {
                    toggle(&mut self.years, year, selected);
                }
            }
            FilterColumn::Seniority => toggle(&mut self.seniorities, label.to_string(), selected),
            FilterColumn::Contract => toggle(&mut self.contracts, label.to_string(), selected),
            FilterColumn::CompanySize => {
                toggle(&mut self.company_sizes, label.to_string(), selected)
            }
        }
    }

    pub fn select_all(&mut self, column: FilterColumn, options: &FilterOptions) {
        let full = Self::all(options);
        match column {
            FilterColumn::Year => self.years = full.years,
            FilterColumn::Seniority => self.seniorities = full.seniorities,
            FilterColumn::Contract => self.contracts = full.contracts,
            FilterColumn::CompanySize => self.company_sizes = full.company_sizes,
        }
    }

    pub fn clear(&mut self, column: FilterColumn) {
        match column {
            FilterColumn::Year => self.years.clear(),
            FilterColumn::Seniority => self.seniorities.clear(),
            FilterColumn::Contract => self.contracts.clear(),
            FilterColumn::CompanySize => self.company_sizes.clear(),
        }
    }

    pub fn selected_count(&self, column: FilterColumn) -> usize {
        match column {
            FilterColumn::Year => self.years.len(),
            FilterColumn::Seniority => self.seniorities.len(),
            FilterColumn::Contract => self.contracts.len(),
            FilterColumn::CompanySize => self.company_sizes.len(),
        }
    }
}

/// Records that survived the active filters. Holds row indices into the
/// shared dataset rather than copies of the rows.
#[derive(Debug, Clone)]
pub struct WorkingSubset {
    dataset: Arc<Dataset>,
    rows: Vec<usize>,
}

impl WorkingSubset {
    /// Subset containing every row of `dataset`.
    pub fn full(dataset: &Arc<Dataset>) -> Self {
        Self {
            dataset: Arc::clone(dataset),
            rows: (0..dataset.len()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SalaryRecord> + '_ {
        let records = self.dataset.records();
        self.rows.iter().map(move |&idx| &records[idx])
    }

    pub fn salaries(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().map(|record| record.salary_usd)
    }
}

impl PartialEq for WorkingSubset {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.dataset, &other.dataset) && self.rows == other.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, seniority: &str, contract: &str, size: &str) -> SalaryRecord {
        SalaryRecord {
            year,
            seniority: seniority.into(),
            contract: contract.into(),
            company_size: size.into(),
            role: "Data Engineer".into(),
            residence: "BR".into(),
            remote: "remoto".into(),
            salary_usd: 100_000.0,
        }
    }

    fn dataset() -> Arc<Dataset> {
        Arc::new(Dataset::new(vec![
            record(2024, "senior", "integral", "media"),
            record(2022, "junior", "freelancer", "grande"),
            record(2023, "pleno", "integral", "pequena"),
            record(2024, "junior", "integral", "media"),
        ]))
    }

    #[test]
    fn options_are_distinct_and_sorted() {
        let options = FilterOptions::from_dataset(&dataset());
        assert_eq!(options.years, vec![2022, 2023, 2024]);
        assert_eq!(options.seniorities, vec!["junior", "pleno", "senior"]);
        assert_eq!(options.contracts, vec!["freelancer", "integral"]);
        assert_eq!(options.company_sizes, vec!["grande", "media", "pequena"]);
        assert_eq!(
            options.labels(FilterColumn::Year),
            vec!["2022", "2023", "2024"]
        );
    }

    #[test]
    fn default_selection_keeps_everything() {
        let data = dataset();
        let selection = FilterSelection::all(&FilterOptions::from_dataset(&data));
        assert_eq!(selection.apply(&data), WorkingSubset::full(&data));
    }

    #[test]
    fn subset_respects_every_selected_set() {
        let data = dataset();
        let options = FilterOptions::from_dataset(&data);
        let mut selection = FilterSelection::all(&options);
        selection.set(FilterColumn::Contract, "freelancer", false);
        selection.set(FilterColumn::Seniority, "pleno", false);

        let subset = selection.apply(&data);
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|r| selection.matches(r)));
        assert!(subset.iter().all(|r| r.contract == "integral"));
        assert!(subset.iter().all(|r| r.seniority != "pleno"));
    }

    #[test]
    fn clearing_any_filter_empties_the_subset() {
        let data = dataset();
        let options = FilterOptions::from_dataset(&data);
        for column in FilterColumn::ALL {
            let mut selection = FilterSelection::all(&options);
            selection.clear(column);
            assert_eq!(selection.selected_count(column), 0);
            assert!(selection.apply(&data).is_empty(), "{column:?}");
        }
    }

    #[test]
    fn select_all_restores_a_column() {
        let options = FilterOptions::from_dataset(&dataset());
        let mut selection = FilterSelection::all(&options);
        selection.clear(FilterColumn::Year);
        selection.select_all(FilterColumn::Year, &options);
        assert_eq!(selection, FilterSelection::all(&options));
    }

    #[test]
    fn year_labels_round_trip_through_set() {
        let options = FilterOptions::from_dataset(&dataset());
        let mut selection = FilterSelection::all(&options);
        selection.set(FilterColumn::Year, "2023", false);
        assert!(!selection.is_selected(FilterColumn::Year, "2023"));
        assert!(selection.is_selected(FilterColumn::Year, "2024"));

        selection.set(FilterColumn::Year, "not-a-year", true);
        assert_eq!(selection.years.len(), 2);
    }

    #[test]
    fn single_year_matches_direct_count() {
        let data = dataset();
        let options = FilterOptions::from_dataset(&data);
        let mut selection = FilterSelection::all(&options);
        selection.years = [2024].into_iter().collect();

        let direct = data.iter().filter(|r| r.year == 2024).count();
        assert_eq!(selection.apply(&data).len(), direct);
    }

    #[test]
    fn subset_keeps_dataset_order() {
        let data = dataset();
        let mut selection = FilterSelection::all(&FilterOptions::from_dataset(&data));
        selection.set(FilterColumn::Year, "2022", false);
        let years: Vec<i32> = selection.apply(&data).iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2024, 2023, 2024]);
    }

    #[test]
    fn restore_without_a_saved_choice_selects_everything() {
        let options = FilterOptions::from_dataset(&dataset());
        assert_eq!(
            FilterSelection::restore(None, &options),
            FilterSelection::all(&options)
        );
    }

    #[test]
    fn restore_keeps_a_saved_choice() {
        let options = FilterOptions::from_dataset(&dataset());
        let mut saved = FilterSelection::all(&options);
        saved.set(FilterColumn::Year, "2022", false);
        saved.clear(FilterColumn::Contract);

        let restored = FilterSelection::restore(Some(&saved), &options);
        assert_eq!(restored, saved);
        assert_eq!(restored.selected_count(FilterColumn::Contract), 0);
    }

    #[test]
    fn restore_drops_values_the_dataset_lacks() {
        let options = FilterOptions::from_dataset(&dataset());
        let mut saved = FilterSelection::all(&options);
        saved.set(FilterColumn::Year, "1999", true);
        saved.set(FilterColumn::Seniority, "lead", true);

        let restored = FilterSelection::restore(Some(&saved), &options);
        assert_eq!(restored, FilterSelection::all(&options));
    }
}
