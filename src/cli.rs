use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// HydroSOS river flow status and forecast engine.
#[derive(Parser)]
#[command(
    name = "hydrosos",
    version,
    about = "River flow status classification and ensemble forecast processing"
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
    /// Classify monthly flow status for every station in a directory.
    Status(StatusArgs),
    /// Build forecast bands, percentiles, and member counts per station.
    Forecast(ForecastArgs),
}

/// Status-calculation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    /// Rank every year per calendar month and classify against fixed
    /// rank cutoffs.
    Fixed,
    /// Interpolate climatology thresholds from the reference window
    /// and classify values against them.
    Rank,
}

/// Arguments for the `status` subcommand.
#[derive(clap::Args)]
pub struct StatusArgs {
    /// Directory of daily flow CSV files, one per station.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory for the output tables.
    #[arg(short, long)]
    pub output: PathBuf,

    /// First year of the reference period.
    #[arg(long, default_value_t = 1991)]
    pub start_year: i32,

    /// Last year of the reference period.
    #[arg(long, default_value_t = 2020)]
    pub end_year: i32,

    /// Status-calculation scheme.
    #[arg(long, value_enum, default_value_t = Scheme::Fixed)]
    pub scheme: Scheme,
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Directory of observed-simulated daily discharge files.
    #[arg(long)]
    pub observed: PathBuf,

    /// Directory of forecast ensemble member files.
    #[arg(long)]
    pub forecasts: PathBuf,

    /// Directory for the output tables.
    #[arg(short, long)]
    pub output: PathBuf,
}
