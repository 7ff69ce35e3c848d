//! Dashboard render pipeline
//!
//! The loaded tables are built once and shared read-only; every selection
//! change runs `selection → project/rank/build → view` from scratch.
//!
//! # Example
//!
//! ```rust,no_run
//! use poverty_dashboard::dashboard::{Dashboard, Selection};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dashboard = Dashboard::load("state_poverty_rates.csv")?;
//!     let view = dashboard.render(&Selection::new("2013", "Viridis"))?;
//!
//!     println!("{} states ranked", view.ranking.rows.len());
//!     Ok(())
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::charts::{choropleth, heatmap, table, ChoroplethFigure, ColorTheme, HeatmapSpec, RankingTable};
use crate::data::{
    augment, load, project, rank, to_long_form, AugmentedTable, DashboardResult, LongFormTable,
    RawPovertyTable, StateCodeMap, POVERTY_RATE, STATE, YEAR,
};

/// Year selected when none is given
pub const DEFAULT_YEAR: &str = "2023";

/// Theme selected when none is given
pub const DEFAULT_THEME: ColorTheme = ColorTheme::Blues;

/// Census data source shown in the about panel
pub const DATA_SOURCE_URL: &str =
    "https://www.census.gov/data/datasets/time-series/demo/popest/2010s-state-total.html";

/// User selection driving one render cycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    #[serde(default = "default_year")]
    pub year: String,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_year() -> String {
    DEFAULT_YEAR.to_string()
}

fn default_theme() -> String {
    DEFAULT_THEME.name().to_string()
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            year: default_year(),
            theme: default_theme(),
        }
    }
}

impl Selection {
    pub fn new(year: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            theme: theme.into(),
        }
    }
}

/// Static informational panel
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AboutPanel {
    pub source_label: String,
    pub source_url: String,
    pub description: String,
}

impl AboutPanel {
    fn for_years(years: &[String]) -> Self {
        let covered = match years {
            [] => String::new(),
            [only] => only.clone(),
            [first, second] => format!("{} and {}", first, second),
            [init @ .., last] => format!("{}, and {}", init.join(", "), last),
        };

        Self {
            source_label: "U.S. Census Bureau".to_string(),
            source_url: DATA_SOURCE_URL.to_string(),
            description: format!(
                "This dashboard visualizes state-level poverty rates for {}.",
                covered
            ),
        }
    }
}

/// Everything one render cycle produces
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub year: String,
    pub theme: ColorTheme,
    pub choropleth: ChoroplethFigure,
    pub ranking: RankingTable,
    pub heatmap: HeatmapSpec,
    pub about: AboutPanel,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug)]
struct DashboardData {
    table: AugmentedTable,
    long_form: LongFormTable,
}

/// Loaded, immutable dashboard data; cheap to clone
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: Arc<DashboardData>,
}

impl Dashboard {
    /// Derive the augmented and long-form tables from a raw table
    pub fn from_raw(raw: &RawPovertyTable, lookup: &StateCodeMap) -> Self {
        let table = augment(raw, lookup);
        let long_form = to_long_form(&table);

        Self {
            data: Arc::new(DashboardData { table, long_form }),
        }
    }

    /// Load the CSV and derive all tables using the built-in code lookup
    pub fn load(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let raw = load(path)?;
        Ok(Self::from_raw(&raw, StateCodeMap::global()))
    }

    pub fn table(&self) -> &AugmentedTable {
        &self.data.table
    }

    pub fn long_form(&self) -> &LongFormTable {
        &self.data.long_form
    }

    /// Year columns available for selection
    pub fn years(&self) -> &[String] {
        self.data.table.years()
    }

    pub fn state_count(&self) -> usize {
        self.data.table.len()
    }

    /// Choropleth for one year
    pub fn choropleth(&self, year: &str, theme: &str) -> DashboardResult<ChoroplethFigure> {
        let projection = project(&self.data.table, year)?;
        choropleth::build(&projection, POVERTY_RATE, theme)
    }

    /// Ranking table for one year
    pub fn ranking(&self, year: &str) -> DashboardResult<RankingTable> {
        let projection = project(&self.data.table, year)?;
        Ok(table::build(&rank(&projection)))
    }

    /// Heatmap over all years
    pub fn heatmap(&self, theme: &str) -> DashboardResult<HeatmapSpec> {
        heatmap::build(&self.data.long_form, YEAR, STATE, POVERTY_RATE, theme)
    }

    /// Run one full render cycle for a selection
    pub fn render(&self, selection: &Selection) -> DashboardResult<DashboardView> {
        let span = tracing::info_span!("render", year = %selection.year, theme = %selection.theme);
        let _guard = span.enter();

        let theme: ColorTheme = selection.theme.parse()?;
        let projection = project(&self.data.table, &selection.year)?;

        let choropleth = choropleth::build(&projection, POVERTY_RATE, theme.name())?;
        let ranking = table::build(&rank(&projection));
        let heatmap = heatmap::build(&self.data.long_form, YEAR, STATE, POVERTY_RATE, theme.name())?;

        tracing::debug!("Render complete");

        Ok(DashboardView {
            year: selection.year.clone(),
            theme,
            choropleth,
            ranking,
            heatmap,
            about: AboutPanel::for_years(self.years()),
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{load_str, DashboardError};

    fn dashboard() -> Dashboard {
        let raw = load_str(
            "State,2003,2013,2023
Alabama,15.1,18.7,16.2
Texas,14.0,13.6,14.2
Ruritania,20.0,21.0,22.0",
        )
        .unwrap();
        Dashboard::from_raw(&raw, StateCodeMap::global())
    }

    #[test]
    fn test_render_default_selection() {
        let view = dashboard().render(&Selection::default()).unwrap();

        assert_eq!(view.year, "2023");
        assert_eq!(view.theme, ColorTheme::Blues);
        assert_eq!(view.ranking.rows[0].state, "Ruritania");
        assert_eq!(view.choropleth.plotted_codes(), vec![("AL", 16.2), ("TX", 14.2)]);
        assert_eq!(view.heatmap.data.values.len(), 9);
        assert_eq!(
            view.about.description,
            "This dashboard visualizes state-level poverty rates for 2003, 2013, and 2023."
        );
    }

    #[test]
    fn test_render_failures_leave_data_usable() {
        let dashboard = dashboard();

        let err = dashboard.render(&Selection::new("1999", "blues")).unwrap_err();
        assert_eq!(err.component(), "selection");

        let err = dashboard.render(&Selection::new("2013", "sepia")).unwrap_err();
        assert!(matches!(err, DashboardError::Configuration(_)));

        let view = dashboard.render(&Selection::new("2013", "VIRIDIS")).unwrap();
        assert_eq!(view.theme, ColorTheme::Viridis);
        assert_eq!(view.ranking.rows[0].state, "Ruritania");
        assert_eq!(view.ranking.rows[1].state, "Alabama");
    }

    #[test]
    fn test_individual_artifacts_match_render() {
        let dashboard = dashboard();
        let view = dashboard.render(&Selection::new("2003", "reds")).unwrap();

        assert_eq!(dashboard.choropleth("2003", "reds").unwrap(), view.choropleth);
        assert_eq!(dashboard.ranking("2003").unwrap(), view.ranking);
        assert_eq!(dashboard.heatmap("reds").unwrap(), view.heatmap);
    }

    #[test]
    fn test_about_panel_years() {
        assert_eq!(
            AboutPanel::for_years(&["2023".to_string()]).description,
            "This dashboard visualizes state-level poverty rates for 2023."
        );
        assert_eq!(
            AboutPanel::for_years(&["2003".to_string(), "2013".to_string()]).description,
            "This dashboard visualizes state-level poverty rates for 2003 and 2013."
        );
        assert_eq!(
            AboutPanel::for_years(&["2003".to_string(), "2013".to_string(), "2023".to_string()])
                .description,
            "This dashboard visualizes state-level poverty rates for 2003, 2013, and 2023."
        );
    }

    #[test]
    fn test_selection_defaults_from_json() {
        let selection: Selection = serde_json::from_str(r#"{"theme": "magma"}"#).unwrap();

        assert_eq!(selection.year, "2023");
        assert_eq!(selection.theme, "magma");
    }
}
