//! Application State
//!
//! Shared state accessible by all API handlers. The dashboard data is
//! immutable after load, so handlers read it without locking.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{ApiConfig, DashboardConfig};
use crate::dashboard::{Dashboard, Selection};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded tables and render pipeline
    pub dashboard: Dashboard,
    /// Selector options and page text
    pub settings: Arc<DashboardConfig>,
    /// Server configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dashboard: Dashboard, settings: DashboardConfig, config: ApiConfig) -> Self {
        Self {
            dashboard,
            settings: Arc::new(settings),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Fill unset selection fields from the configured defaults
    pub fn selection(&self, year: Option<String>, theme: Option<String>) -> Selection {
        Selection {
            year: year.unwrap_or_else(|| self.settings.default_year.clone()),
            theme: theme.unwrap_or_else(|| self.settings.default_theme.clone()),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
