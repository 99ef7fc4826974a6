//! Reference catalog built from the historical student dataset
//!
//! The dataset is a CSV table of prior student records. At startup we derive
//! the distinct values of every categorical column, which become the choices
//! offered by the form and the membership sets used by validation.
//!
//! # Header matching
//!
//! Column headers are normalized before lookup: surrounding whitespace is
//! trimmed, internal whitespace runs and `-` become `_`, and everything is
//! lowercased. This lets `skill level`, `Skill-Level` and `skill_level` (and
//! the dataset's own `confusion  level`) all resolve to the same column.
//!
//! Only headers are trimmed. Cell values are kept exactly as written, so an
//! interest of ` Data Science` stays padded wherever it is shown.
//!
//! Value sets are sorted lexically, except that a column whose values are all
//! integers (such as `year`) is sorted numerically.
//!
//! The catalog is read-only once loaded.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{debug, info, warn};

use crate::error::{Result, RoadmapError};
use crate::types::{variant_names, CommunicationLevel, Level, SkillLevel};

/// Categorical columns the catalog exposes value sets for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CatalogField {
    Year,
    Branch,
    Interest,
    BudgetLevel,
    SkillLevel,
    StressLevel,
    ConfusionLevel,
    CommunicationLevel,
}

impl CatalogField {
    /// Normalized header names accepted for this field
    pub fn column_names(&self) -> &'static [&'static str] {
        match self {
            Self::Year => &["year"],
            Self::Branch => &["branch"],
            Self::Interest => &["interest"],
            Self::BudgetLevel => &["budget_level", "budget"],
            Self::SkillLevel => &["skill_level"],
            Self::StressLevel => &["stress_level"],
            Self::ConfusionLevel => &["confusion_level"],
            Self::CommunicationLevel => &["communication", "communication_level"],
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Branch => "Branch",
            Self::Interest => "Primary Interest",
            Self::BudgetLevel => "Budget Level",
            Self::SkillLevel => "Skill Level",
            Self::StressLevel => "Stress Level",
            Self::ConfusionLevel => "Confusion Level",
            Self::CommunicationLevel => "Communication Level",
        }
    }

    /// Check that a raw dataset value belongs to the field's closed enum.
    ///
    /// Open fields (year, branch, interest) accept anything non-empty.
    fn check_member(&self, value: &str) -> Result<()> {
        let known = match self {
            Self::Year | Self::Branch | Self::Interest => return Ok(()),
            Self::BudgetLevel | Self::StressLevel | Self::ConfusionLevel => {
                Level::from_str(value).is_ok()
            }
            Self::SkillLevel => SkillLevel::from_str(value).is_ok(),
            Self::CommunicationLevel => CommunicationLevel::from_str(value).is_ok(),
        };
        if known {
            return Ok(());
        }

        let expected = match self {
            Self::SkillLevel => variant_names::<SkillLevel>(),
            Self::CommunicationLevel => variant_names::<CommunicationLevel>(),
            _ => variant_names::<Level>(),
        };
        Err(RoadmapError::catalog(format!(
            "column '{}' contains unrecognized value '{}' (expected one of: {})",
            self,
            value,
            expected.join(", ")
        )))
    }
}

/// Normalize a CSV header for lookup.
pub fn normalize_header(header: &str) -> String {
    header
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .replace('-', "_")
        .to_lowercase()
}

/// Distinct categorical values derived from the reference dataset
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    value_sets: BTreeMap<CatalogField, Vec<String>>,
}

/// Numeric order when every value is an integer, lexical order otherwise
fn display_order(values: BTreeSet<String>) -> Vec<String> {
    let mut values: Vec<String> = values.into_iter().collect();
    if values.iter().all(|v| v.parse::<i64>().is_ok()) {
        values.sort_by_key(|v| v.parse::<i64>().unwrap_or_default());
    }
    values
}

impl ReferenceCatalog {
    /// Load the catalog from a CSV file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading reference dataset from {}", path.display());
        let file = File::open(path).map_err(|e| {
            RoadmapError::catalog(format!("cannot open dataset {}: {}", path.display(), e))
        })?;
        Self::from_reader(file)
    }

    /// Build the catalog from any CSV source with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();

        let mut columns: BTreeMap<CatalogField, usize> = BTreeMap::new();
        for field in CatalogField::iter() {
            let index = normalized
                .iter()
                .position(|h| field.column_names().contains(&h.as_str()))
                .ok_or_else(|| {
                    RoadmapError::catalog(format!(
                        "dataset is missing the '{}' column (accepted headers: {})",
                        field,
                        field.column_names().join(", ")
                    ))
                })?;
            columns.insert(field, index);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        if rows.is_empty() {
            return Err(RoadmapError::catalog("dataset contains no records"));
        }

        let mut value_sets: BTreeMap<CatalogField, Vec<String>> = BTreeMap::new();
        for (field, index) in &columns {
            let mut values = BTreeSet::new();
            let mut blanks = 0usize;
            for row in &rows {
                match row.get(*index).map(String::as_str) {
                    Some(value) if !value.is_empty() => {
                        if !values.contains(value) {
                            field.check_member(value)?;
                            values.insert(value.to_string());
                        }
                    }
                    _ => blanks += 1,
                }
            }
            if blanks > 0 {
                warn!("Column '{}' has {} blank cells; ignoring them", field, blanks);
            }
            if values.is_empty() {
                return Err(RoadmapError::catalog(format!(
                    "column '{}' has no values",
                    field
                )));
            }
            debug!("{}: {} distinct values", field, values.len());
            value_sets.insert(*field, display_order(values));
        }

        info!(
            "Reference catalog ready: {} records, {} columns",
            rows.len(),
            headers.len()
        );

        Ok(Self {
            headers,
            rows,
            value_sets,
        })
    }

    /// Sorted distinct values observed for a field
    pub fn value_set(&self, field: CatalogField) -> &[String] {
        // Every field is inserted (or load fails), so the lookup cannot miss.
        self.value_sets
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Exact membership test for a field value
    pub fn contains(&self, field: CatalogField, value: &str) -> bool {
        self.value_set(field).iter().any(|v| v == value)
    }

    /// Column headers exactly as they appear in the dataset
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All dataset rows, in file order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of records in the dataset
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no records (never true for a loaded catalog)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
