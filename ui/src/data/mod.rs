//! Salary dataset: record schema, loading, filtering and country lookups.

use std::sync::Arc;

use serde::{de, Deserialize, Deserializer, Serialize};

pub mod country;
pub mod filter;
pub mod loader;

pub use filter::{FilterColumn, FilterOptions, FilterSelection, WorkingSubset};
pub use loader::{fetch_dataset, load_cached, parse_csv};

/// One row of the salary CSV. Field names map to the published column
/// headers; columns not listed here are ignored while parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "ano", deserialize_with = "lenient_year")]
    pub year: i32,
    #[serde(rename = "senioridade")]
    pub seniority: String,
    #[serde(rename = "contrato")]
    pub contract: String,
    #[serde(rename = "tamanho_empresa")]
    pub company_size: String,
    #[serde(rename = "cargo")]
    pub role: String,
    /// ISO 3166-1 alpha-2 code of the employee's residence.
    #[serde(rename = "residencia")]
    pub residence: String,
    #[serde(rename = "remoto")]
    pub remote: String,
    #[serde(rename = "usd")]
    pub salary_usd: f64,
}

/// Column headers in the order the export writes them.
pub const COLUMNS: [&str; 8] = [
    "ano",
    "senioridade",
    "contrato",
    "tamanho_empresa",
    "cargo",
    "residencia",
    "remoto",
    "usd",
];

/// Loaded rows. Immutable once built; shared as `Arc<Dataset>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<SalaryRecord>,
}

impl Dataset {
    pub fn new(records: Vec<SalaryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalaryRecord> {
        self.records.iter()
    }
}

/// Component-prop handle to the loaded dataset. Two handles are equal when
/// they point at the same load.
#[derive(Debug, Clone)]
pub struct SharedDataset(pub Arc<Dataset>);

impl PartialEq for SharedDataset {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// Spreadsheet exports sometimes write whole years as `2023.0`.
fn lenient_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Ok(year);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && value.abs() < i32::MAX as f64 => Ok(value as i32),
        _ => Err(de::Error::custom(format!("invalid year `{raw}`"))),
    }
}
