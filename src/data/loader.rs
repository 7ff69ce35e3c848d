//! CSV Loading
//!
//! Reads the wide-format poverty table: a "State" column plus one numeric
//! column per year. Loading is one-shot; every failure is a data source error.

use std::io::Read;
use std::path::Path;

use super::error::{DashboardError, DashboardResult};
use super::types::{RawPovertyTable, StateRecord, STATE};

/// Default location of the source CSV, relative to the working directory
pub const DEFAULT_CSV_PATH: &str = "state_poverty_rates.csv";

/// Load the poverty table from a CSV file
pub fn load(path: impl AsRef<Path>) -> DashboardResult<RawPovertyTable> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| DashboardError::data_source(path, format!("cannot open file: {}", e)))?;

    let table = read_table(file, path)?;

    tracing::info!(
        path = %path.display(),
        states = table.len(),
        years = ?table.years(),
        "Loaded poverty table"
    );

    Ok(table)
}

/// Load the poverty table from an in-memory CSV string
pub fn load_str(csv_data: &str) -> DashboardResult<RawPovertyTable> {
    read_table(csv_data.as_bytes(), Path::new("<memory>"))
}

fn read_table<R: Read>(source: R, path: &Path) -> DashboardResult<RawPovertyTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DashboardError::data_source(path, format!("unreadable header: {}", e)))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let state_column = headers
        .iter()
        .position(|h| h == STATE)
        .ok_or_else(|| DashboardError::data_source(path, "missing required \"State\" column"))?;

    let year_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != state_column)
        .map(|(idx, h)| (idx, h.clone()))
        .collect();

    for (pos, (_, name)) in year_columns.iter().enumerate() {
        if name.is_empty() {
            return Err(DashboardError::data_source(path, "empty column header"));
        }
        if year_columns[..pos].iter().any(|(_, other)| other == name) {
            return Err(DashboardError::data_source(
                path,
                format!("duplicate column header: {}", name),
            ));
        }
    }

    let mut records = Vec::new();

    for (line_num, result) in reader.records().enumerate() {
        // Header is line 1
        let line = line_num + 2;

        let record = result
            .map_err(|e| DashboardError::data_source(path, format!("line {}: {}", line, e)))?;

        let state = record.get(state_column).unwrap_or_default().trim().to_string();
        if state.is_empty() {
            return Err(DashboardError::data_source(
                path,
                format!("line {}: empty state name", line),
            ));
        }

        let mut rates = Vec::with_capacity(year_columns.len());
        for (col_idx, year) in &year_columns {
            let cell = record.get(*col_idx).unwrap_or_default().trim();
            // f64 parsing accepts "NaN" and "inf"; neither is a rate
            let value = cell
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    DashboardError::data_source(
                        path,
                        format!("line {}: invalid poverty rate for {} in {}: {:?}", line, state, year, cell),
                    )
                })?;
            rates.push(value);
        }

        if records.iter().any(|r: &StateRecord| r.state == state) {
            tracing::warn!(state = %state, line, "Duplicate state row in poverty table");
        }

        records.push(StateRecord { state, rates });
    }

    let years = year_columns.into_iter().map(|(_, name)| name).collect();

    RawPovertyTable::from_records(years, records)
        .map_err(|e| DashboardError::data_source(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "State,2003,2013,2023
Alabama,15.1,18.7,16.2
Texas,14.0,13.6,14.2
Vermont,8.6,10.2,10.4";

    #[test]
    fn test_load_str() {
        let table = load_str(SAMPLE).unwrap();

        assert_eq!(table.years(), &["2003", "2013", "2023"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.records()[1], StateRecord::new("Texas", vec![14.0, 13.6, 14.2]));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = load(file.path()).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(dir.path().join("absent.csv"));

        assert!(matches!(result, Err(DashboardError::DataSource { .. })));
    }

    #[test]
    fn test_missing_state_column() {
        let result = load_str("Name,2003\nTexas,14.0");

        match result {
            Err(DashboardError::DataSource { reason, .. }) => assert!(reason.contains("State")),
            other => panic!("expected data source error, got {:?}", other),
        }
    }

    #[test]
    fn test_bom_and_whitespace_in_header() {
        let table = load_str("\u{feff}State , 2003 ,2013\nOhio,12.0,15.8").unwrap();

        assert_eq!(table.years(), &["2003", "2013"]);
        assert_eq!(table.records()[0].state, "Ohio");
    }

    #[test]
    fn test_non_numeric_rate() {
        let result = load_str("State,2003\nTexas,n/a");

        match result {
            Err(DashboardError::DataSource { reason, .. }) => {
                assert!(reason.contains("line 2"));
                assert!(reason.contains("Texas"));
            }
            other => panic!("expected data source error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_rates_rejected() {
        for cell in ["NaN", "nan", "inf", "-inf", "infinity"] {
            let csv_data = format!("State,2023\nTexas,14.2\nOhio,{}\nIowa,11.1", cell);

            match load_str(&csv_data) {
                Err(DashboardError::DataSource { reason, .. }) => {
                    assert!(reason.contains("line 3"), "{}: {}", cell, reason);
                    assert!(reason.contains("Ohio"), "{}: {}", cell, reason);
                }
                other => panic!("expected data source error for {:?}, got {:?}", cell, other),
            }
        }
    }

    #[test]
    fn test_empty_rate_cell() {
        let result = load_str("State,2023\nTexas,14.2\nMaine,");
        assert!(matches!(result, Err(DashboardError::DataSource { .. })));
    }

    #[test]
    fn test_ragged_row() {
        let result = load_str("State,2003,2013\nTexas,14.0");
        assert!(matches!(result, Err(DashboardError::DataSource { .. })));
    }

    #[test]
    fn test_duplicate_year_header() {
        let result = load_str("State,2003,2003\nTexas,14.0,13.6");
        assert!(matches!(result, Err(DashboardError::DataSource { .. })));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let table = load_str("State,2003,2013,2023").unwrap();

        assert!(table.is_empty());
        assert_eq!(table.years().len(), 3);
    }
}
