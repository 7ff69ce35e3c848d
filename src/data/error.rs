//! Data layer error types
//!
//! Defines the two failure kinds a render cycle can hit: the source table
//! could not be loaded, or a caller-supplied selection does not match the data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or transforming poverty data
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Input file missing, unreadable, malformed, or lacking the "State" column
    #[error("Data source error ({path:?}): {reason}")]
    DataSource { path: PathBuf, reason: String },

    /// A year, column name, or color theme does not match the data or the
    /// enumerated values
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DashboardError {
    /// Build a data source error for the given path
    pub fn data_source(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        DashboardError::DataSource {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Build a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        DashboardError::Configuration(msg.into())
    }

    /// Component of the render cycle that failed, for user-facing messages
    pub fn component(&self) -> &'static str {
        match self {
            DashboardError::DataSource { .. } => "load",
            DashboardError::Configuration(_) => "selection",
        }
    }
}

/// Result type alias for data operations
pub type DashboardResult<T> = Result<T, DashboardError>;
