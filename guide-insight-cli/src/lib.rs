//! Command-line interface for analysing guide performance exports.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use log::LevelFilter;

mod analyze;
mod error;
mod fs;
mod report;

pub use error::CliError;

use analyze::{AnalyzeArgs, run_analyze};

const ARG_INPUT: &str = "input";
const ARG_RANKING: &str = "ranking";
const ARG_LEADERBOARD_SIZE: &str = "leaderboard-size";
const ARG_SEARCH: &str = "search";
const ARG_FAVOURITES_ONLY: &str = "favourites-only";
const ARG_SORT: &str = "sort";
const ARG_SORT_DIRECTION: &str = "sort-direction";
const ARG_OUTPUT: &str = "output";
const ARG_BELOW_AVERAGE_THRESHOLD: &str = "below-average-threshold";
const ARG_OUTLIER_MULTIPLIER: &str = "outlier-multiplier";
const ARG_MIN_CLIENT_INFO_REQUESTS: &str = "min-client-info-requests";
const ENV_INPUT: &str = "GUIDE_INSIGHT_CMDS_ANALYZE_INPUT";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// export cannot be read, or the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    match cli.command {
        Command::Analyze(args) => run_analyze(args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level).parse_default_env();
    if let Err(err) = builder.try_init() {
        log::debug!("logger already initialised: {err}");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "guide-insight",
    about = "Behavioural scoring and watchlists for tour guides",
    version
)]
struct Cli {
    /// Log debug output (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify guides from a JSON export and print a report.
    Analyze(AnalyzeArgs),
}

#[cfg(test)]
mod tests;
