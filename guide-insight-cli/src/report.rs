//! JSON report assembled from a finished analysis.

use guide_insight_analyzer::{ClassifiedGuide, GuideAnalysis, KpiTotals, PopulationStats};
use guide_insight_core::{AnalyzerThresholds, GuideId, RankingMode, StatusTag, WatchlistReason};
use serde::Serialize;

use crate::analyze::AnalyzeConfig;

/// Everything the dashboard needs from one analysis run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalysisReport<'a> {
    pub(crate) guide_count: usize,
    pub(crate) thresholds: &'a AnalyzerThresholds,
    pub(crate) population: &'a PopulationStats,
    pub(crate) kpi_totals: KpiTotals,
    pub(crate) status_distribution: Vec<StatusCount>,
    pub(crate) ranking: RankingMode,
    pub(crate) leaderboard: Vec<LeaderboardRow<'a>>,
    pub(crate) watchlist: Vec<WatchlistRow<'a>>,
    pub(crate) guides: Vec<&'a ClassifiedGuide>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusCount {
    pub(crate) status: StatusTag,
    pub(crate) label: &'static str,
    pub(crate) count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LeaderboardRow<'a> {
    pub(crate) rank: usize,
    pub(crate) id: &'a GuideId,
    pub(crate) name: String,
    pub(crate) value: f64,
    pub(crate) primary_status: StatusTag,
}

#[derive(Debug, Serialize)]
pub(crate) struct WatchlistRow<'a> {
    pub(crate) id: &'a GuideId,
    pub(crate) name: String,
    pub(crate) reasons: Vec<ReasonRow>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReasonRow {
    pub(crate) code: WatchlistReason,
    pub(crate) label: &'static str,
}

impl<'a> AnalysisReport<'a> {
    /// Build the report. The display filter only narrows `guides`.
    pub(crate) fn build(analysis: &'a GuideAnalysis, config: &AnalyzeConfig) -> Self {
        let status_distribution = analysis
            .status_distribution()
            .into_iter()
            .map(|(status, count)| StatusCount {
                status,
                label: status.label(),
                count,
            })
            .collect();

        let leaderboard = analysis
            .leaderboard_with_limit(config.ranking, config.leaderboard_size)
            .into_iter()
            .zip(1_usize..)
            .map(|(guide, rank)| LeaderboardRow {
                rank,
                id: &guide.record.id,
                name: guide.record.display_name(),
                value: guide.ranking_value(config.ranking),
                primary_status: guide.metrics.primary_status(),
            })
            .collect();

        let watchlist = analysis
            .watchlist()
            .into_iter()
            .map(|guide| WatchlistRow {
                id: &guide.record.id,
                name: guide.record.display_name(),
                reasons: guide
                    .watchlist_reasons
                    .iter()
                    .map(|&code| ReasonRow {
                        code,
                        label: code.label(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            guide_count: analysis.len(),
            thresholds: analysis.thresholds(),
            population: analysis.stats(),
            kpi_totals: analysis.kpi_totals(),
            status_distribution,
            ranking: config.ranking,
            leaderboard,
            watchlist,
            guides: config.filter.apply(analysis.guides()),
        }
    }
}
