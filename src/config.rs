//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::charts::ColorTheme;
use crate::data::DEFAULT_CSV_PATH;
use crate::dashboard::{DEFAULT_THEME, DEFAULT_YEAR};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Source data configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

fn default_csv_path() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_PATH)
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Selector options and page text
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Years offered by the year selector; must be CSV columns
    #[serde(default = "default_years")]
    pub years: Vec<String>,

    /// Themes offered by the theme selector
    #[serde(default = "default_themes")]
    pub themes: Vec<String>,

    #[serde(default = "default_year")]
    pub default_year: String,

    #[serde(default = "default_theme")]
    pub default_theme: String,
}

fn default_title() -> String {
    "State Poverty Rates".to_string()
}

fn default_years() -> Vec<String> {
    vec!["2003".to_string(), "2013".to_string(), "2023".to_string()]
}

fn default_themes() -> Vec<String> {
    ColorTheme::all().iter().map(|t| t.name().to_string()).collect()
}

fn default_year() -> String {
    DEFAULT_YEAR.to_string()
}

fn default_theme() -> String {
    DEFAULT_THEME.name().to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            years: default_years(),
            themes: default_themes(),
            default_year: default_year(),
            default_theme: default_theme(),
        }
    }
}

impl DashboardConfig {
    /// Check selector options for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.years.is_empty() {
            return Err(ConfigError::Invalid("dashboard.years is empty".to_string()));
        }
        if !self.years.contains(&self.default_year) {
            return Err(ConfigError::Invalid(format!(
                "dashboard.default_year {:?} is not in dashboard.years",
                self.default_year
            )));
        }

        for theme in self.themes.iter().chain(std::iter::once(&self.default_theme)) {
            theme
                .parse::<ColorTheme>()
                .map_err(|e| ConfigError::Invalid(format!("dashboard theme: {}", e)))?;
        }

        Ok(())
    }

    /// Check that every selectable year exists in the loaded data
    pub fn check_years(&self, available: &[String]) -> Result<(), ConfigError> {
        match self.years.iter().find(|y| !available.contains(y)) {
            Some(missing) => Err(ConfigError::Invalid(format!(
                "dashboard year {:?} is not a column of the data (available: {})",
                missing,
                available.join(", ")
            ))),
            None => Ok(()),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// The first existing file wins. A file that exists but fails to load is
    /// an error rather than a silent fall back to defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("poverty-dashboard").join("config.toml")),
            Some(PathBuf::from("/etc/poverty-dashboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        match Self::load_first(&config_paths)? {
            Some(config) => Ok(config),
            None => {
                tracing::info!("Using default config with environment overrides");
                Ok(Self::from_env())
            }
        }
    }

    /// Load the first of `paths` that exists, or `None` if none do
    fn load_first(paths: &[PathBuf]) -> Result<Option<Self>, ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                Ok(Some(config))
            }
            None => Ok(None),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(csv_path) = std::env::var("POVERTY_DASHBOARD_CSV") {
            self.data.csv_path = PathBuf::from(csv_path);
        }

        if let Ok(host) = std::env::var("POVERTY_DASHBOARD_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("POVERTY_DASHBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Ok(level) = std::env::var("POVERTY_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("POVERTY_DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Poverty Dashboard Configuration
#
# Environment variables override these settings:
# - POVERTY_DASHBOARD_CSV
# - POVERTY_DASHBOARD_HOST
# - POVERTY_DASHBOARD_PORT
# - POVERTY_DASHBOARD_LOG_LEVEL
# - POVERTY_DASHBOARD_LOG_FORMAT

[data]
# Wide-format CSV: a "State" column plus one column per year
csv_path = "state_poverty_rates.csv"

[api]
# Dashboard server host
host = "127.0.0.1"

# Dashboard server port
port = 8501

# Allowed CORS origins (empty = same origin only)
cors_origins = []

[dashboard]
# Sidebar title
title = "State Poverty Rates"

# Years offered by the year selector (must match CSV headers)
years = ["2003", "2013", "2023"]

# Color themes offered by the theme selector
themes = ["blues", "cividis", "greens", "inferno", "magma", "plasma", "reds", "rainbow", "turbo", "viridis"]

# Initial selections
default_year = "2023"
default_theme = "blues"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
