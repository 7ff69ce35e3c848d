//! Poverty Dashboard CLI
//!
//! Offline access to the render pipeline:
//! - Render a full dashboard view to JSON
//! - Print the ranking table for a year
//! - Dump the long-format table as CSV
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use poverty_dashboard::config::{generate_default_config, Config};
use poverty_dashboard::dashboard::{Dashboard, Selection};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poverty-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render U.S. state poverty rate charts from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Source CSV (overrides the config file)
    #[arg(long, global = true)]
    pub csv: Option<PathBuf>,

    /// Config file (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render map, ranking and heatmap for one selection as JSON
    Render {
        /// Census year column
        #[arg(short, long)]
        year: Option<String>,
        /// Color theme (case-insensitive)
        #[arg(short, long)]
        theme: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print states ranked by poverty rate
    Ranking {
        /// Census year column
        #[arg(short, long)]
        year: Option<String>,
        /// Show only the top N states
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the long-format (State, Year, Poverty Rate) table as CSV
    LongForm,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(csv) = cli.csv {
        config.data.csv_path = csv;
    }

    poverty_dashboard::logging::init(&config.logging);

    match cli.command {
        Commands::Render {
            year,
            theme,
            output,
        } => {
            let dashboard = load(&config)?;
            let selection = Selection {
                year: year.unwrap_or(config.dashboard.default_year),
                theme: theme.unwrap_or(config.dashboard.default_theme),
            };

            let view = dashboard
                .render(&selection)
                .with_context(|| format!("{} failed", stage(&selection)))?;
            let json = serde_json::to_string_pretty(&view)?;

            write_output(output, &json)?;
        }

        Commands::Ranking { year, limit } => {
            let dashboard = load(&config)?;
            let year = year.unwrap_or(config.dashboard.default_year);

            let mut table = dashboard.ranking(&year)?;
            if let Some(limit) = limit {
                table.rows.truncate(limit);
            }

            println!("Poverty rate ranking, {}", table.year);
            print!("{}", table.to_text());
        }

        Commands::LongForm => {
            let dashboard = load(&config)?;

            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for row in dashboard.long_form().rows() {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }

        Commands::Config { output } => {
            write_output(output, &generate_default_config())?;
        }
    }

    Ok(())
}

fn load(config: &Config) -> anyhow::Result<Dashboard> {
    Dashboard::load(&config.data.csv_path)
        .with_context(|| format!("load of {} failed", config.data.csv_path.display()))
}

fn stage(selection: &Selection) -> String {
    format!("selection (year {}, theme {})", selection.year, selection.theme)
}

fn write_output(output: Option<PathBuf>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
