//! Leaderboard, watchlist and dashboard totals derived from classified guides.

use std::collections::BTreeMap;

use guide_insight_core::{GuideRecord, RankingMode, StatusTag};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::analysis::ClassifiedGuide;

/// Number of guides shown on a leaderboard.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 8;

/// Top `limit` guides by `mode`, highest first.
///
/// The sort is stable: guides with equal values keep their input order.
#[must_use]
pub fn leaderboard(
    guides: &[ClassifiedGuide],
    mode: RankingMode,
    limit: usize,
) -> Vec<&ClassifiedGuide> {
    let mut ranked: Vec<&ClassifiedGuide> = guides.iter().collect();
    ranked.sort_by(|a, b| b.ranking_value(mode).total_cmp(&a.ranking_value(mode)));
    ranked.truncate(limit);
    ranked
}

/// Guides with at least one watchlist reason, in input order.
#[must_use]
pub fn watchlist(guides: &[ClassifiedGuide]) -> Vec<&ClassifiedGuide> {
    guides
        .iter()
        .filter(|guide| guide.is_watchlisted())
        .collect()
}

/// Number of guides per primary status, in legend order.
#[must_use]
pub fn status_distribution(guides: &[ClassifiedGuide]) -> BTreeMap<StatusTag, usize> {
    let mut counts = BTreeMap::new();
    for guide in guides {
        *counts.entry(guide.metrics.primary_status()).or_insert(0) += 1;
    }
    counts
}

/// Sums of the raw counters across a population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct KpiTotals {
    /// Total tours led.
    pub tours_done: u64,
    /// Total photos taken.
    pub photos_taken_amount: u64,
    /// Total distinct photo moments.
    pub photos_taken_frequency: u64,
    /// Total client-info requests.
    pub requested_client_info: u64,
}

impl KpiTotals {
    /// Sum counters over `records`, saturating rather than overflowing.
    ///
    /// # Examples
    /// ```
    /// use guide_insight_analyzer::KpiTotals;
    /// use guide_insight_core::GuideRecord;
    ///
    /// let records = [
    ///     GuideRecord::new(1).with_tours_done(3).with_requested_client_info(1),
    ///     GuideRecord::new(2).with_tours_done(4).with_photos_taken_amount(9),
    /// ];
    /// let totals = KpiTotals::from_records(&records);
    /// assert_eq!(totals.tours_done, 7);
    /// assert_eq!(totals.photos_taken_amount, 9);
    /// assert_eq!(totals.requested_client_info, 1);
    /// ```
    #[must_use]
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a GuideRecord>) -> Self {
        records.into_iter().fold(Self::default(), |totals, record| Self {
            tours_done: totals.tours_done.saturating_add(record.tours_done),
            photos_taken_amount: totals
                .photos_taken_amount
                .saturating_add(record.photos_taken_amount),
            photos_taken_frequency: totals
                .photos_taken_frequency
                .saturating_add(record.photos_taken_frequency),
            requested_client_info: totals
                .requested_client_info
                .saturating_add(record.requested_client_info),
        })
    }
}
