//! Facade crate for the guide behaviour analyzer.
//!
//! This crate re-exports the guide record types and the analysis pipeline
//! that turns a snapshot of guides into scores, statuses and aggregates.

#![forbid(unsafe_code)]

pub use guide_insight_core::{
    AnalyzerThresholds, GuideId, GuideRecord, RankingMode, RankingModeParseError,
    StatusParseError, StatusTag, ThresholdError, WatchlistReason,
};

pub use guide_insight_analyzer::{
    ClassifiedGuide, DEFAULT_LEADERBOARD_SIZE, DerivedGuideMetrics, DisplayFilter, GuideAnalysis,
    GuideRatios, IssueFlags, KpiTotals, PopulationStats, SortDirection, SortField, SortParseError,
    ValueRange, analyze, analyze_with, classify, derive_ratios, engagement_score, issue_flags,
    leaderboard, median, normalize, status_distribution, watchlist, watchlist_reasons,
};

#[cfg(feature = "test-support")]
pub use guide_insight_core::test_support;
