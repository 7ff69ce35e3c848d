//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use serde::{Deserialize, Serialize};

/// Optional selection query parameters (`?year=2013&theme=viridis`)
#[derive(Debug, Default, Deserialize)]
pub struct SelectionParams {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

/// Selector option
#[derive(Debug, Serialize)]
pub struct ThemeOption {
    pub value: String,
    pub label: String,
}

/// Selector options for the dashboard shell
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub title: String,
    pub years: Vec<String>,
    pub themes: Vec<ThemeOption>,
    pub default_year: String,
    pub default_theme: String,
}

/// Health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Number of states loaded
    pub states: usize,
    /// Year columns available in the data
    pub years: Vec<String>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
