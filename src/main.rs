//! Poverty Dashboard Server
//!
//! Run with: cargo run --bin poverty-dashboard [config.toml]
//!
//! Without an argument, configuration is read from the default locations
//! (see `Config::load_default`) and environment variables.

use anyhow::Context;
use poverty_dashboard::api::{serve, AppState};
use poverty_dashboard::config::Config;
use poverty_dashboard::dashboard::Dashboard;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Config::load_with_env(&path)?,
        None => Config::load_default()?,
    };

    poverty_dashboard::logging::init(&config.logging);

    tracing::info!("Starting poverty dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data file: {:?}", config.data.csv_path);

    config.dashboard.validate()?;

    // One-shot load; the dashboard cannot render anything without it
    let dashboard = Dashboard::load(&config.data.csv_path)
        .with_context(|| format!("loading {}", config.data.csv_path.display()))?;

    config.dashboard.check_years(dashboard.years())?;

    tracing::info!(
        "Loaded {} states, years {:?}",
        dashboard.state_count(),
        dashboard.years()
    );

    let state = AppState::new(dashboard, config.dashboard.clone(), config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("Poverty dashboard stopped");
    Ok(())
}
