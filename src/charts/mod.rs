//! Chart Builders
//!
//! Each builder turns a data snapshot plus selection parameters into a
//! serializable artifact for a client-side renderer. Builders keep no state.
//!
//! - [`choropleth`]: Plotly figure of U.S. states
//! - [`heatmap`]: Vega-Lite year × state grid
//! - [`table`]: ranking table with column formatting
//! - [`theme`]: the selectable continuous color scales

pub mod choropleth;
pub mod heatmap;
pub mod table;
pub mod theme;

pub use choropleth::ChoroplethFigure;
pub use heatmap::HeatmapSpec;
pub use table::{ColumnSpec, RankingRow, RankingTable};
pub use theme::ColorTheme;
