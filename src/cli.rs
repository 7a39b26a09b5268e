use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nereus operability weather-window analysis.
#[derive(Parser)]
#[command(
    name = "nereus",
    version,
    about = "Operability weather-window statistics for metocean time series"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Waiting-time statistics for the configured operation.
    Window(WindowArgs),
    /// Waiting-time statistics for every calendar month.
    Monthly(MonthlyArgs),
    /// Operable hours per year below each threshold.
    Hours(HoursArgs),
}

/// Arguments for the `window` subcommand.
#[derive(clap::Args)]
pub struct WindowArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nereus.toml")]
    pub config: PathBuf,

    /// Restrict statistics to one calendar month (1-12), overriding the config.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,

    /// Override output JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the per-sample waiting-time signal to this Parquet file.
    #[arg(long)]
    pub signal: Option<PathBuf>,
}

/// Arguments for the `monthly` subcommand.
#[derive(clap::Args)]
pub struct MonthlyArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nereus.toml")]
    pub config: PathBuf,

    /// Override output JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `hours` subcommand.
#[derive(clap::Args)]
pub struct HoursArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nereus.toml")]
    pub config: PathBuf,

    /// Override output JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
