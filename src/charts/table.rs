//! Ranking table builder
//!
//! Pairs the ranked rows with a column formatting spec: a plain text column
//! for the state and a progress bar column for the rate.

use serde::Serialize;

use crate::data::{RankedProjection, POVERTY_RATE, STATE};

/// Upper bound of the progress bar scale, in percent
pub const RATE_BAR_MAX: f64 = 30.0;

/// How a table column should be displayed
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnSpec {
    Text {
        field: &'static str,
        label: &'static str,
    },
    Progress {
        field: &'static str,
        label: &'static str,
        format: &'static str,
        min_value: f64,
        max_value: f64,
    },
}

/// One displayed row: state name and rate
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankingRow {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Poverty Rate")]
    pub poverty_rate: f64,
}

/// Ranked rows plus display spec, index hidden
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankingTable {
    pub year: String,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<RankingRow>,
    pub hide_index: bool,
}

/// Build the ranking table from a ranked projection
pub fn build(ranked: &RankedProjection) -> RankingTable {
    RankingTable {
        year: ranked.year().to_string(),
        columns: vec![
            ColumnSpec::Text {
                field: STATE,
                label: "State",
            },
            ColumnSpec::Progress {
                field: POVERTY_RATE,
                label: "Poverty Rate (%)",
                format: "%.1f",
                min_value: 0.0,
                max_value: RATE_BAR_MAX,
            },
        ],
        rows: ranked
            .rows()
            .iter()
            .map(|r| RankingRow {
                state: r.state.clone(),
                poverty_rate: r.poverty_rate,
            })
            .collect(),
        hide_index: true,
    }
}

impl RankingTable {
    /// Render as fixed-width text for terminals
    pub fn to_text(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|r| r.state.chars().count())
            .max()
            .unwrap_or(0)
            .max("State".len());

        let mut out = format!("{:<width$}  Poverty Rate (%)\n", "State", width = width);
        for row in &self.rows {
            let filled = ((row.poverty_rate / RATE_BAR_MAX).clamp(0.0, 1.0) * 20.0).round() as usize;
            out.push_str(&format!(
                "{:<width$}  {:>5.1} {}\n",
                row.state,
                row.poverty_rate,
                "#".repeat(filled),
                width = width
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{augment, project, rank, RawPovertyTable, StateCodeMap, StateRecord};

    fn ranked() -> RankedProjection {
        let raw = RawPovertyTable::from_records(
            vec!["2023".into()],
            vec![
                StateRecord::new("Maine", vec![10.1]),
                StateRecord::new("Mississippi", vec![18.0]),
            ],
        )
        .unwrap();
        rank(&project(&augment(&raw, StateCodeMap::global()), "2023").unwrap())
    }

    #[test]
    fn test_build_table() {
        let table = build(&ranked());

        assert_eq!(table.year, "2023");
        assert!(table.hide_index);
        assert_eq!(table.rows[0].state, "Mississippi");
        assert_eq!(table.rows.len(), 2);

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["columns"][1]["kind"], "progress");
        assert_eq!(json["columns"][1]["max_value"], 30.0);
        assert_eq!(json["columns"][1]["format"], "%.1f");
        assert_eq!(json["rows"][0]["Poverty Rate"], 18.0);
        assert!(json["rows"][0].get("Code").is_none());
    }

    #[test]
    fn test_to_text() {
        let text = build(&ranked()).to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Mississippi"));
        assert!(lines[1].contains("18.0"));
    }

    #[test]
    fn test_to_text_aligns_non_ascii_names() {
        let table = RankingTable {
            year: "2023".into(),
            columns: Vec::new(),
            rows: vec![
                RankingRow {
                    state: "Nuevo León".into(),
                    poverty_rate: 12.5,
                },
                RankingRow {
                    state: "Ohio".into(),
                    poverty_rate: 9.0,
                },
            ],
            hide_index: true,
        };
        let text = table.to_text();

        // Rate field occupies the same character columns on every row
        let width = "Nuevo León".chars().count();
        let rates: Vec<String> = text
            .lines()
            .skip(1)
            .map(|line| line.chars().skip(width + 2).take(5).collect())
            .collect();
        assert_eq!(rates, vec![" 12.5", "  9.0"]);
    }
}
