//! Year selection and ranking
//!
//! Per-selection views are rebuilt on every render; nothing here is cached.

use super::error::{DashboardError, DashboardResult};
use super::types::{AugmentedTable, ProjectionRow, RankedProjection, YearProjection};

/// Project the table down to (State, Code, Poverty Rate) for one year
///
/// Fails with a configuration error if `year` is not a column of the table.
pub fn project(table: &AugmentedTable, year: &str) -> DashboardResult<YearProjection> {
    let idx = table.year_index(year).ok_or_else(|| {
        DashboardError::configuration(format!(
            "unknown year {:?}, available: {}",
            year,
            table.years().join(", ")
        ))
    })?;

    let rows = table
        .records()
        .iter()
        .map(|r| ProjectionRow {
            state: r.state.clone(),
            code: r.code.clone(),
            poverty_rate: r.rates[idx],
        })
        .collect();

    Ok(YearProjection {
        year: year.to_string(),
        rows,
    })
}

/// Sort a projection by poverty rate, highest first
///
/// Ties keep their input order. The input is left untouched.
pub fn rank(projection: &YearProjection) -> RankedProjection {
    let mut rows = projection.rows().to_vec();
    // sort_by is stable
    rows.sort_by(|a, b| b.poverty_rate.total_cmp(&a.poverty_rate));

    RankedProjection {
        year: projection.year().to_string(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{augment, RawPovertyTable, StateCodeMap, StateRecord};

    fn table() -> AugmentedTable {
        let raw = RawPovertyTable::from_records(
            vec!["2003".into(), "2013".into(), "2023".into()],
            vec![
                StateRecord::new("Alabama", vec![15.1, 18.7, 16.2]),
                StateRecord::new("Texas", vec![14.0, 13.6, 14.2]),
                StateRecord::new("Iowa", vec![9.0, 12.7, 11.1]),
                StateRecord::new("Ohio", vec![11.7, 15.8, 14.2]),
                StateRecord::new("Vermont", vec![8.6, 10.2, 10.4]),
            ],
        )
        .unwrap();
        augment(&raw, StateCodeMap::global())
    }

    #[test]
    fn test_project_texas_2023() {
        let projection = project(&table(), "2023").unwrap();

        assert_eq!(projection.year(), "2023");
        assert_eq!(
            projection.rows()[1],
            ProjectionRow {
                state: "Texas".into(),
                code: Some("TX".into()),
                poverty_rate: 14.2,
            }
        );
    }

    #[test]
    fn test_project_every_year_matches_source() {
        let table = table();

        for year in ["2003", "2013", "2023"] {
            let projection = project(&table, year).unwrap();
            assert_eq!(projection.len(), table.len());

            for row in projection.rows() {
                assert_eq!(Some(row.poverty_rate), table.rate(&row.state, year));
            }
        }
    }

    #[test]
    fn test_project_is_idempotent() {
        let table = table();

        for year in ["2003", "2013", "2023"] {
            assert_eq!(project(&table, year).unwrap(), project(&table, year).unwrap());
        }
    }

    #[test]
    fn test_project_unknown_year() {
        let result = project(&table(), "1999");
        assert!(matches!(result, Err(DashboardError::Configuration(_))));

        // Code is a column but not a year
        let result = project(&table(), "Code");
        assert!(matches!(result, Err(DashboardError::Configuration(_))));
    }

    #[test]
    fn test_rank_descending_and_stable() {
        let projection = project(&table(), "2023").unwrap();
        let ranked = rank(&projection);

        let states: Vec<&str> = ranked.rows().iter().map(|r| r.state.as_str()).collect();
        // Texas and Ohio tie at 14.2; Texas comes first in the source
        assert_eq!(states, vec!["Alabama", "Texas", "Ohio", "Iowa", "Vermont"]);

        assert!(ranked
            .rows()
            .windows(2)
            .all(|w| w[0].poverty_rate >= w[1].poverty_rate));
    }

    #[test]
    fn test_rank_is_permutation_and_pure() {
        let projection = project(&table(), "2013").unwrap();
        let before = projection.clone();
        let ranked = rank(&projection);

        assert_eq!(projection, before);
        assert_eq!(ranked.len(), projection.len());
        for row in projection.rows() {
            assert_eq!(ranked.rows().iter().filter(|r| *r == row).count(), 1);
        }
        assert_eq!(rank(&projection), ranked);
    }
}
