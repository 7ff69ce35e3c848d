//! Table reshaping
//!
//! `augment` attaches postal codes, `to_long_form` unpivots the year columns.
//! Both are pure and preserve source row order.

use super::lookup::StateCodeMap;
use super::types::{AugmentedRecord, AugmentedTable, LongFormRow, LongFormTable, RawPovertyTable};

/// Attach the `Code` column by looking up each state name
///
/// Total: one output row per input row. Unknown names get `None`.
pub fn augment(table: &RawPovertyTable, lookup: &StateCodeMap) -> AugmentedTable {
    let records: Vec<AugmentedRecord> = table
        .records()
        .iter()
        .map(|r| AugmentedRecord {
            state: r.state.clone(),
            code: lookup.code(&r.state).map(str::to_string),
            rates: r.rates.clone(),
        })
        .collect();

    let unmapped = records.iter().filter(|r| r.code.is_none()).count();
    if unmapped > 0 {
        tracing::warn!(unmapped, "States without a postal code will not appear on the map");
    }

    AugmentedTable {
        years: table.years().to_vec(),
        records,
    }
}

/// Unpivot every year column into (State, Year, Poverty Rate) rows
///
/// Rows are ordered year-major (all states for the first year, then the
/// next), so row count is states × years. The `Code` column is not a year
/// and is not unpivoted.
pub fn to_long_form(table: &AugmentedTable) -> LongFormTable {
    let mut rows = Vec::with_capacity(table.len() * table.years().len());

    for (idx, year) in table.years().iter().enumerate() {
        for record in table.records() {
            rows.push(LongFormRow {
                state: record.state.clone(),
                year: year.clone(),
                poverty_rate: record.rates[idx],
            });
        }
    }

    LongFormTable { rows }
}
