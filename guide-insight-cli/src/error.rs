//! Error types emitted by the guide-insight CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use guide_insight_core::ThresholdError;
use thiserror::Error;

/// Errors emitted by the guide-insight CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Name of the option holding the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Name of the option holding the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Name of the option holding the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Classification thresholds were rejected.
    #[error("invalid classification thresholds: {0}")]
    InvalidThresholds(#[from] ThresholdError),
    /// The requested leaderboard cannot show any guide.
    #[error("leaderboard size must be at least 1")]
    EmptyLeaderboard,
    /// Opening the guide export failed.
    #[error("failed to open guide export at {path:?}: {source}")]
    OpenExport {
        /// Export path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The guide export was not a JSON array of guide rows.
    #[error("failed to parse guide export JSON at {path:?}: {source}")]
    ParseExport {
        /// Export path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the analysis report failed.
    #[error("failed to serialise analysis report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Creating the report file failed.
    #[error("failed to create report file at {path:?}: {source}")]
    CreateReport {
        /// Report path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the report failed.
    #[error("failed to write analysis report: {0}")]
    WriteReport(#[source] std::io::Error),
}
