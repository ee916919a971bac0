//! The full analysis pipeline and its output.

use std::collections::{BTreeMap, BTreeSet};

use guide_insight_core::{
    AnalyzerThresholds, GuideId, GuideRecord, RankingMode, StatusTag, WatchlistReason,
};
use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::aggregate::{self, DEFAULT_LEADERBOARD_SIZE, KpiTotals};
use crate::classify::{classify, watchlist_reasons};
use crate::engagement::engagement_score;
use crate::population::PopulationStats;
use crate::ratios::{GuideRatios, derive_ratios};

/// Metrics derived for one guide against one population snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DerivedGuideMetrics {
    /// Photos taken per tour.
    pub photos_per_tour: f64,
    /// Client-info requests per tour.
    pub requests_per_tour: f64,
    /// Weighted engagement score in `0.0..=1.0`.
    pub engagement_score: f64,
    /// Ordered tags; the lifecycle tag is always first.
    pub statuses: Vec<StatusTag>,
}

impl DerivedGuideMetrics {
    /// The tag used where only one status can be shown.
    #[must_use]
    pub fn primary_status(&self) -> StatusTag {
        self.statuses
            .first()
            .copied()
            .unwrap_or(StatusTag::Inactive)
    }

    /// Whether the guide carries `tag`.
    #[must_use]
    pub fn has_status(&self, tag: StatusTag) -> bool {
        self.statuses.contains(&tag)
    }
}

/// A guide record together with everything the pipeline derived for it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClassifiedGuide {
    /// The input row, unchanged.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub record: GuideRecord,
    /// Derived metrics and status tags.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub metrics: DerivedGuideMetrics,
    /// Watchlist reason codes; empty when the guide is not watchlisted.
    pub watchlist_reasons: Vec<WatchlistReason>,
}

impl ClassifiedGuide {
    /// Value of the leaderboard column selected by `mode`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "tour counts are far below the f64 mantissa limit"
    )]
    pub fn ranking_value(&self, mode: RankingMode) -> f64 {
        match mode {
            RankingMode::EngagementScore => self.metrics.engagement_score,
            RankingMode::ToursDone => self.record.tours_done as f64,
            RankingMode::PhotosPerTour => self.metrics.photos_per_tour,
            RankingMode::RequestsPerTour => self.metrics.requests_per_tour,
        }
    }

    /// Whether the guide belongs on the watchlist.
    #[must_use]
    pub fn is_watchlisted(&self) -> bool {
        !self.watchlist_reasons.is_empty()
    }
}

/// Classified guides and the population statistics they were measured against.
///
/// The statistics are private to guarantee every status in the analysis was
/// computed from the same snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideAnalysis {
    guides: Vec<ClassifiedGuide>,
    stats: PopulationStats,
    thresholds: AnalyzerThresholds,
}

/// Run the pipeline with the default thresholds.
///
/// # Examples
/// ```
/// use guide_insight_analyzer::analyze;
/// use guide_insight_core::{GuideRecord, StatusTag};
///
/// let analysis = analyze(vec![GuideRecord::new(1)]);
/// let guide = &analysis.guides()[0];
/// assert_eq!(guide.metrics.statuses, vec![StatusTag::Inactive]);
/// assert!((guide.metrics.engagement_score - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn analyze(records: Vec<GuideRecord>) -> GuideAnalysis {
    analyze_with(records, AnalyzerThresholds::default())
}

/// Run the pipeline over a full snapshot of guides.
///
/// Input order is preserved in [`GuideAnalysis::guides`].
#[must_use]
pub fn analyze_with(records: Vec<GuideRecord>, thresholds: AnalyzerThresholds) -> GuideAnalysis {
    warn_on_duplicate_ids(&records);

    let ratios: Vec<GuideRatios> = records.iter().map(derive_ratios).collect();
    let stats = PopulationStats::from_snapshot(&records, &ratios);
    debug!(
        "population of {} guides: median photos/tour {:.3}, median requests/tour {:.3}, tours cut {}",
        stats.guide_count,
        stats.median_photos_per_tour,
        stats.median_requests_per_tour,
        stats.tours_done_percentile_cut
    );

    let guides = records
        .into_iter()
        .zip(ratios)
        .map(|(record, ratios)| classify_one(record, &ratios, &stats, &thresholds))
        .collect();

    GuideAnalysis {
        guides,
        stats,
        thresholds,
    }
}

fn classify_one(
    record: GuideRecord,
    ratios: &GuideRatios,
    stats: &PopulationStats,
    thresholds: &AnalyzerThresholds,
) -> ClassifiedGuide {
    let metrics = DerivedGuideMetrics {
        photos_per_tour: ratios.photos_per_tour,
        requests_per_tour: ratios.requests_per_tour,
        engagement_score: engagement_score(&record, ratios, stats),
        statuses: classify(&record, ratios, stats, thresholds),
    };
    let reasons = watchlist_reasons(&record, ratios, stats, thresholds);
    ClassifiedGuide {
        record,
        metrics,
        watchlist_reasons: reasons,
    }
}

fn warn_on_duplicate_ids(records: &[GuideRecord]) {
    let mut seen = BTreeSet::new();
    for record in records {
        if !seen.insert(&record.id) {
            warn!(
                "guide id {} appears more than once; each row is analysed separately",
                record.id
            );
        }
    }
}

impl GuideAnalysis {
    /// Every classified guide, in input order.
    #[must_use]
    pub fn guides(&self) -> &[ClassifiedGuide] {
        &self.guides
    }

    /// Consume the analysis and return the classified guides.
    #[must_use]
    pub fn into_guides(self) -> Vec<ClassifiedGuide> {
        self.guides
    }

    /// Statistics the guides were classified against.
    #[must_use]
    pub const fn stats(&self) -> &PopulationStats {
        &self.stats
    }

    /// Thresholds the guides were classified with.
    #[must_use]
    pub const fn thresholds(&self) -> &AnalyzerThresholds {
        &self.thresholds
    }

    /// Number of guides analysed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guides.len()
    }

    /// Whether the snapshot was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }

    /// Look up a guide by identifier.
    #[must_use]
    pub fn find(&self, id: &GuideId) -> Option<&ClassifiedGuide> {
        self.guides.iter().find(|guide| &guide.record.id == id)
    }

    /// Top guides by `mode`, limited to the default leaderboard size.
    #[must_use]
    pub fn leaderboard(&self, mode: RankingMode) -> Vec<&ClassifiedGuide> {
        self.leaderboard_with_limit(mode, DEFAULT_LEADERBOARD_SIZE)
    }

    /// Top `limit` guides by `mode`, highest first.
    #[must_use]
    pub fn leaderboard_with_limit(&self, mode: RankingMode, limit: usize) -> Vec<&ClassifiedGuide> {
        aggregate::leaderboard(&self.guides, mode, limit)
    }

    /// Guides with at least one watchlist reason, in input order.
    #[must_use]
    pub fn watchlist(&self) -> Vec<&ClassifiedGuide> {
        aggregate::watchlist(&self.guides)
    }

    /// Sums of the raw counters across all guides.
    #[must_use]
    pub fn kpi_totals(&self) -> KpiTotals {
        KpiTotals::from_records(self.guides.iter().map(|guide| &guide.record))
    }

    /// Number of guides per primary status.
    #[must_use]
    pub fn status_distribution(&self) -> BTreeMap<StatusTag, usize> {
        aggregate::status_distribution(&self.guides)
    }
}
