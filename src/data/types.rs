//! Core table types for the poverty dashboard
//!
//! This module defines the typed tables that replace string-keyed data frames:
//! - `RawPovertyTable`: wide-format source table, one row per state
//! - `AugmentedTable`: raw table plus the postal `Code` column
//! - `LongFormTable`: one row per (state, year) pair
//! - `YearProjection` / `RankedProjection`: per-year views for the map and table
//!
//! Column names are fixed by the constants below and are what the chart
//! builders validate field references against.

use serde::{Deserialize, Serialize};

use super::error::{DashboardError, DashboardResult};

/// State name column
pub const STATE: &str = "State";
/// Postal code column
pub const CODE: &str = "Code";
/// Unpivoted year column
pub const YEAR: &str = "Year";
/// Poverty rate value column (percent)
pub const POVERTY_RATE: &str = "Poverty Rate";

/// A single row of the wide-format source table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateRecord {
    /// Full state name, unique within a table
    pub state: String,
    /// One poverty rate per year column, aligned with the table's `years`
    pub rates: Vec<f64>,
}

impl StateRecord {
    pub fn new(state: impl Into<String>, rates: impl Into<Vec<f64>>) -> Self {
        Self {
            state: state.into(),
            rates: rates.into(),
        }
    }
}

/// Wide-format poverty table as read from the CSV
///
/// Immutable once constructed; every derived view is computed from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawPovertyTable {
    years: Vec<String>,
    records: Vec<StateRecord>,
}

impl RawPovertyTable {
    /// Build a table, checking that every record has one rate per year
    pub fn from_records(years: Vec<String>, records: Vec<StateRecord>) -> DashboardResult<Self> {
        if let Some(bad) = records.iter().find(|r| r.rates.len() != years.len()) {
            return Err(DashboardError::configuration(format!(
                "record for {} has {} rates, expected {}",
                bad.state,
                bad.rates.len(),
                years.len()
            )));
        }

        Ok(Self { years, records })
    }

    /// Year column labels in source order
    pub fn years(&self) -> &[String] {
        &self.years
    }

    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names in source order ("State" followed by the years)
    pub fn columns(&self) -> Vec<&str> {
        std::iter::once(STATE)
            .chain(self.years.iter().map(String::as_str))
            .collect()
    }
}

/// A wide-format row with its postal code attached
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AugmentedRecord {
    pub state: String,
    /// `None` when the state name has no entry in the code lookup
    pub code: Option<String>,
    pub rates: Vec<f64>,
}

/// Raw table plus the `Code` column; same rows, same order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AugmentedTable {
    pub(crate) years: Vec<String>,
    pub(crate) records: Vec<AugmentedRecord>,
}

impl AugmentedTable {
    pub fn years(&self) -> &[String] {
        &self.years
    }

    pub fn records(&self) -> &[AugmentedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a year column, if present
    pub fn year_index(&self, year: &str) -> Option<usize> {
        self.years.iter().position(|y| y == year)
    }

    /// Look up a single cell by state name and year label
    pub fn rate(&self, state: &str, year: &str) -> Option<f64> {
        let idx = self.year_index(year)?;
        self.records
            .iter()
            .find(|r| r.state == state)
            .and_then(|r| r.rates.get(idx).copied())
    }

    /// Column names: "State", the years, then "Code"
    pub fn columns(&self) -> Vec<&str> {
        std::iter::once(STATE)
            .chain(self.years.iter().map(String::as_str))
            .chain(std::iter::once(CODE))
            .collect()
    }
}

/// One (state, year) observation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LongFormRow {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poverty Rate")]
    pub poverty_rate: f64,
}

/// Long-format table used by the heatmap
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LongFormTable {
    pub(crate) rows: Vec<LongFormRow>,
}

impl LongFormTable {
    /// Fixed schema of the long-format table
    pub const COLUMNS: [&'static str; 3] = [STATE, YEAR, POVERTY_RATE];

    pub fn rows(&self) -> &[LongFormRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        Self::COLUMNS.contains(&name)
    }

    /// Look up the value for a (state, year) pair
    pub fn get(&self, state: &str, year: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.state == state && r.year == year)
            .map(|r| r.poverty_rate)
    }

    /// Distinct years in first-seen order
    pub fn years(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|r| r.year.as_str()))
    }

    /// Distinct states in first-seen order
    pub fn states(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|r| r.state.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for v in values {
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen
}

/// A state's poverty rate for one selected year
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectionRow {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Code")]
    pub code: Option<String>,
    #[serde(rename = "Poverty Rate")]
    pub poverty_rate: f64,
}

/// Per-year projection: (State, Code, Poverty Rate), one row per state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearProjection {
    pub(crate) year: String,
    pub(crate) rows: Vec<ProjectionRow>,
}

impl YearProjection {
    pub const COLUMNS: [&'static str; 3] = [STATE, CODE, POVERTY_RATE];

    /// The year this projection was taken from
    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn rows(&self) -> &[ProjectionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        Self::COLUMNS.contains(&name)
    }
}

/// A projection sorted by poverty rate, highest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedProjection {
    pub(crate) year: String,
    pub(crate) rows: Vec<ProjectionRow>,
}

impl RankedProjection {
    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn rows(&self) -> &[ProjectionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
