//! # Poverty Dashboard
//!
//! Interactive dashboard of U.S. state poverty rates across census years:
//! a choropleth map, a ranked table and a year × state heatmap, all driven
//! by a year and a color theme selection.
//!
//! ## Modules
//!
//! - [`data`]: Typed tables, CSV loading, reshaping and per-year selection
//! - [`charts`]: Choropleth, heatmap and ranking table builders
//! - [`dashboard`]: The render pipeline from a selection to a full view
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use poverty_dashboard::dashboard::{Dashboard, Selection};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dashboard = Dashboard::load("state_poverty_rates.csv")?;
//!
//!     let view = dashboard.render(&Selection::new("2023", "viridis"))?;
//!     for row in view.ranking.rows.iter().take(5) {
//!         println!("{:<20} {:>5.1}%", row.state, row.poverty_rate);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod logging;

// Re-export top-level types for convenience
pub use data::{
    augment, load, project, rank, to_long_form, AugmentedTable, DashboardError,
    DashboardResult, LongFormTable, RankedProjection, RawPovertyTable, StateCodeMap,
    YearProjection,
};

pub use charts::{ChoroplethFigure, ColorTheme, HeatmapSpec, RankingTable};

pub use dashboard::{Dashboard, DashboardView, Selection};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DashboardConfig, DataConfig, LoggingConfig};
