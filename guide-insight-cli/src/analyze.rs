//! Analyze command implementation for the guide-insight CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use guide_insight_analyzer::{
    DEFAULT_LEADERBOARD_SIZE, DisplayFilter, GuideAnalysis, SortDirection, SortField, analyze_with,
};
use guide_insight_core::{
    AnalyzerThresholds, GuideRecord, RankingMode,
    thresholds::{BELOW_AVERAGE_THRESHOLD, MIN_CLIENT_INFO_REQUESTS, OUTLIER_MULTIPLIER},
};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::fs::{self, EntryKind};
use crate::report::AnalysisReport;
use crate::{
    ARG_BELOW_AVERAGE_THRESHOLD, ARG_FAVOURITES_ONLY, ARG_INPUT, ARG_LEADERBOARD_SIZE,
    ARG_MIN_CLIENT_INFO_REQUESTS, ARG_OUTLIER_MULTIPLIER, ARG_OUTPUT, ARG_RANKING, ARG_SEARCH,
    ARG_SORT, ARG_SORT_DIRECTION, CliError, ENV_INPUT,
};

/// CLI arguments for the `analyze` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "analyze",
    long_about = "Read a JSON array of guide rows, derive per-tour ratios and \
                 engagement scores against the whole population, and print \
                 a JSON report with statuses, a leaderboard and the \
                 watchlist. Thresholds can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Classify guides from a JSON export"
)]
#[ortho_config(prefix = "GUIDE_INSIGHT")]
pub(crate) struct AnalyzeArgs {
    /// Path to a JSON file holding an array of guide rows.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Metric used to order the leaderboard.
    #[arg(long = ARG_RANKING, value_name = "mode")]
    #[serde(default)]
    pub(crate) ranking: Option<RankingMode>,
    /// Maximum number of leaderboard rows.
    #[arg(long = ARG_LEADERBOARD_SIZE, value_name = "count")]
    #[serde(default)]
    pub(crate) leaderboard_size: Option<usize>,
    /// Only list guides whose name or id contains this text.
    #[arg(long = ARG_SEARCH, value_name = "text")]
    #[serde(default)]
    pub(crate) search: Option<String>,
    /// Only list guides marked as favourites.
    #[arg(
        long = ARG_FAVOURITES_ONLY,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) favourites_only: Option<bool>,
    /// Field used to order the guide listing.
    #[arg(long = ARG_SORT, value_name = "field")]
    #[serde(default)]
    pub(crate) sort: Option<SortField>,
    /// Direction for `--sort` (defaults to descending).
    #[arg(long = ARG_SORT_DIRECTION, value_name = "direction")]
    #[serde(default)]
    pub(crate) sort_direction: Option<SortDirection>,
    /// Write the report here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Fraction of the median photos-per-tour below which photo activity is low.
    #[arg(long = ARG_BELOW_AVERAGE_THRESHOLD, value_name = "ratio")]
    #[serde(default)]
    pub(crate) below_average_threshold: Option<f64>,
    /// Multiple of the median requests-per-tour that marks an outlier.
    #[arg(long = ARG_OUTLIER_MULTIPLIER, value_name = "ratio")]
    #[serde(default)]
    pub(crate) outlier_multiplier: Option<f64>,
    /// Absolute client-info request count that always marks an outlier.
    #[arg(long = ARG_MIN_CLIENT_INFO_REQUESTS, value_name = "count")]
    #[serde(default)]
    pub(crate) min_client_info_requests: Option<u64>,
}

impl AnalyzeArgs {
    pub(crate) fn into_config(self) -> Result<AnalyzeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnalyzeConfig::try_from(merged)
    }
}

/// Resolved `analyze` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnalyzeConfig {
    /// Path to the guide export.
    pub(crate) input: Utf8PathBuf,
    /// Leaderboard ordering.
    pub(crate) ranking: RankingMode,
    /// Leaderboard length.
    pub(crate) leaderboard_size: usize,
    /// Filter applied to the guide listing.
    pub(crate) filter: DisplayFilter,
    /// Optional report destination.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Classification thresholds.
    pub(crate) thresholds: AnalyzerThresholds,
}

impl AnalyzeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.input, ARG_INPUT)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match fs::entry_kind(path) {
            Ok(EntryKind::File) => Ok(()),
            Ok(EntryKind::Other) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<AnalyzeArgs> for AnalyzeConfig {
    type Error = CliError;

    fn try_from(args: AnalyzeArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env: ENV_INPUT,
        })?;

        let leaderboard_size = args.leaderboard_size.unwrap_or(DEFAULT_LEADERBOARD_SIZE);
        if leaderboard_size == 0 {
            return Err(CliError::EmptyLeaderboard);
        }

        let thresholds = AnalyzerThresholds::new(
            args.below_average_threshold.unwrap_or(BELOW_AVERAGE_THRESHOLD),
            args.outlier_multiplier.unwrap_or(OUTLIER_MULTIPLIER),
            args.min_client_info_requests.unwrap_or(MIN_CLIENT_INFO_REQUESTS),
        )?;

        let mut filter =
            DisplayFilter::new().favourites_only(args.favourites_only.unwrap_or(false));
        if let Some(query) = args.search {
            filter = filter.with_search(query);
        }
        if let Some(field) = args.sort {
            filter = filter.sorted_by(field, args.sort_direction.unwrap_or_default());
        }

        Ok(Self {
            input,
            ranking: args.ranking.unwrap_or_default(),
            leaderboard_size,
            filter,
            output: args.output,
            thresholds,
        })
    }
}

pub(super) fn run_analyze(args: AnalyzeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_analyze_with(args, &mut stdout)
}

pub(super) fn run_analyze_with(args: AnalyzeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_analyze(&config, writer)
}

/// Validate inputs, run the analysis and emit the report.
///
/// The report goes to `config.output` when set and to `writer` otherwise.
pub(crate) fn execute_analyze(
    config: &AnalyzeConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    config.validate_sources()?;
    let records = load_guides(&config.input)?;
    info!("loaded {} guide rows from {}", records.len(), config.input);

    let analysis = analyze_with(records, config.thresholds);
    log_summary(&analysis);

    let report = AnalysisReport::build(&analysis, config);
    match &config.output {
        Some(path) => {
            let mut file = fs::create_report(path).map_err(|source| CliError::CreateReport {
                path: path.clone(),
                source,
            })?;
            write_report(&mut file, &report)?;
            info!("wrote analysis report to {path}");
            Ok(())
        }
        None => write_report(writer, &report),
    }
}

fn log_summary(analysis: &GuideAnalysis) {
    let flagged = analysis.watchlist().len();
    info!(
        "classified {} guides; {flagged} on the watchlist",
        analysis.len()
    );
}

/// Loads a JSON array of [`GuideRecord`] rows from disk.
pub(crate) fn load_guides(path: &Utf8Path) -> Result<Vec<GuideRecord>, CliError> {
    let file = fs::open_export(path).map_err(|source| CliError::OpenExport {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseExport {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(writer: &mut dyn Write, report: &AnalysisReport<'_>) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<AnalyzeConfig, CliError> {
    let merged = AnalyzeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    AnalyzeConfig::try_from(merged)
}
