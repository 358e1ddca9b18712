use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Cyclecal: rotating cycle-day timetable to calendar converter.
#[derive(Parser)]
#[command(
    name = "cyclecal",
    version,
    about = "Turn a rotating cycle-day timetable into dated calendar events"
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
    /// Print the cycle day resolved for every date in the school year.
    Map(MapArgs),
    /// Print a month-by-month review of dates, cycle days and classes.
    Review(ReviewArgs),
    /// Write the calendar-import CSV.
    Export(ExportArgs),
}

/// Schedule inputs shared by every subcommand.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Path to TOML schedule file.
    #[arg(short, long, default_value = "cyclecal.toml")]
    pub config: PathBuf,

    /// JSON file with parameters extracted from a free-text description.
    #[arg(long)]
    pub hints: Option<PathBuf>,
}

/// Output format for the `map` subcommand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MapFormat {
    /// Pretty-printed JSON array of date mappings.
    #[default]
    Json,
    /// One aligned line per date.
    Table,
}

/// Arguments for the `map` subcommand.
#[derive(clap::Args)]
pub struct MapArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = MapFormat::Json)]
    pub format: MapFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `review` subcommand.
#[derive(clap::Args)]
pub struct ReviewArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Override the CSV output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
