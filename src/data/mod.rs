//! Poverty Data Layer
//!
//! This module provides the typed tables the dashboard is built from:
//!
//! - **types**: Table and row structures (raw, augmented, long-form, projections)
//! - **lookup**: State name to postal code mapping
//! - **loader**: CSV loading of the wide-format source table
//! - **reshape**: Code augmentation and wide-to-long unpivot
//! - **selection**: Per-year projection and ranking
//! - **error**: Error types
//!
//! # Data Flow
//!
//! ```text
//! CSV → RawPovertyTable → augment → AugmentedTable ─┬→ project(year) → YearProjection → rank → RankedProjection
//!                                                    └→ to_long_form → LongFormTable
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use poverty_dashboard::data::{augment, load, project, rank, StateCodeMap};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let raw = load("state_poverty_rates.csv")?;
//!     let table = augment(&raw, StateCodeMap::global());
//!
//!     let ranked = rank(&project(&table, "2023")?);
//!     if let Some(top) = ranked.rows().first() {
//!         println!("Highest poverty rate in 2023: {} ({:.1}%)", top.state, top.poverty_rate);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod lookup;
pub mod reshape;
pub mod selection;
pub mod types;

// Re-export commonly used types
pub use error::{DashboardError, DashboardResult};
pub use loader::{load, load_str, DEFAULT_CSV_PATH};
pub use lookup::StateCodeMap;
pub use reshape::{augment, to_long_form};
pub use selection::{project, rank};
pub use types::{
    AugmentedRecord, AugmentedTable, LongFormRow, LongFormTable, ProjectionRow,
    RankedProjection, RawPovertyTable, StateRecord, YearProjection, CODE, POVERTY_RATE, STATE,
    YEAR,
};
