//! Status classification and watchlist reasons.
//!
//! Every guide receives exactly one lifecycle tag, placed first. Issue and
//! positive tags follow, evaluated against the population medians. Guides
//! that have not led a tour yet are only ever tagged `inactive`.
//!
//! The client-info check compares the raw request count against a multiple
//! of the median requests *per tour*, not the guide's own rate.

use guide_insight_core::{AnalyzerThresholds, GuideRecord, StatusTag, WatchlistReason};

use crate::population::PopulationStats;
use crate::ratios::GuideRatios;

/// Issue conditions evaluated for one guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IssueFlags {
    /// Fewer than one photo per tour, or well below the median.
    pub low_photo_activity: bool,
    /// Request count above both the absolute floor and the median multiple.
    pub high_client_info_requests: bool,
}

impl IssueFlags {
    /// Whether any issue was raised.
    #[must_use]
    pub const fn any(self) -> bool {
        self.low_photo_activity || self.high_client_info_requests
    }

    /// The single issue tag describing these flags, if any.
    #[must_use]
    pub const fn tag(self) -> Option<StatusTag> {
        match (self.low_photo_activity, self.high_client_info_requests) {
            (true, true) => Some(StatusTag::NeedsAttention),
            (true, false) => Some(StatusTag::LowPhotoActivity),
            (false, true) => Some(StatusTag::HighClientInfoRequests),
            (false, false) => None,
        }
    }
}

/// Evaluate the issue conditions for one guide.
#[must_use]
pub fn issue_flags(
    record: &GuideRecord,
    ratios: &GuideRatios,
    stats: &PopulationStats,
    thresholds: &AnalyzerThresholds,
) -> IssueFlags {
    if record.tours_done == 0 {
        return IssueFlags::default();
    }
    IssueFlags {
        low_photo_activity: below_one_photo_per_tour(ratios)
            || below_average_photos(ratios, stats, thresholds),
        high_client_info_requests: often_requests_client_info(record, stats, thresholds),
    }
}

/// Assign the ordered status tags for one guide.
///
/// # Examples
/// ```
/// use guide_insight_analyzer::{PopulationStats, classify, derive_ratios};
/// use guide_insight_core::{AnalyzerThresholds, GuideRecord, StatusTag};
///
/// let guide = GuideRecord::new(1);
/// let stats = PopulationStats::from_records(std::slice::from_ref(&guide));
/// let tags = classify(&guide, &derive_ratios(&guide), &stats, &AnalyzerThresholds::default());
/// assert_eq!(tags, vec![StatusTag::Inactive]);
/// ```
#[must_use]
pub fn classify(
    record: &GuideRecord,
    ratios: &GuideRatios,
    stats: &PopulationStats,
    thresholds: &AnalyzerThresholds,
) -> Vec<StatusTag> {
    let lifecycle = StatusTag::lifecycle(record.tours_done);
    let mut statuses = vec![lifecycle];
    if lifecycle == StatusTag::Inactive {
        return statuses;
    }

    let issues = issue_flags(record, ratios, stats, thresholds);
    statuses.extend(issues.tag());
    if is_content_focused(ratios, stats) {
        statuses.push(StatusTag::ContentFocused);
    }
    if !issues.any() && is_high_performer(record, ratios, stats) {
        statuses.push(StatusTag::HighPerformer);
    }
    statuses
}

/// Reason codes for a guide's watchlist entry; empty when not watchlisted.
///
/// Reasons restate [`issue_flags`] as codes, so a guide without tours has
/// none.
///
/// The photo reasons are mutually exclusive, with the per-tour floor taking
/// priority over the median comparison.
#[must_use]
pub fn watchlist_reasons(
    record: &GuideRecord,
    ratios: &GuideRatios,
    stats: &PopulationStats,
    thresholds: &AnalyzerThresholds,
) -> Vec<WatchlistReason> {
    if record.tours_done == 0 {
        return Vec::new();
    }

    let mut reasons = Vec::new();
    if below_one_photo_per_tour(ratios) {
        reasons.push(WatchlistReason::LessThanOnePhotoPerTour);
    } else if below_average_photos(ratios, stats, thresholds) {
        reasons.push(WatchlistReason::LessPhotosThanAverage);
    }
    if often_requests_client_info(record, stats, thresholds) {
        reasons.push(WatchlistReason::OftenRequestsClientInfo);
    }
    reasons
}

fn below_one_photo_per_tour(ratios: &GuideRatios) -> bool {
    ratios.photos_per_tour < 1.0
}

#[expect(
    clippy::float_arithmetic,
    reason = "the threshold is a fraction of the median"
)]
fn below_average_photos(
    ratios: &GuideRatios,
    stats: &PopulationStats,
    thresholds: &AnalyzerThresholds,
) -> bool {
    let median = stats.median_photos_per_tour;
    median > 0.0 && ratios.photos_per_tour < median * thresholds.below_average_threshold()
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the raw request count is compared against a multiple of the median rate"
)]
fn often_requests_client_info(
    record: &GuideRecord,
    stats: &PopulationStats,
    thresholds: &AnalyzerThresholds,
) -> bool {
    let median = stats.median_requests_per_tour;
    let requests = record.requested_client_info;
    requests > thresholds.min_client_info_requests()
        && requests as f64 > median * thresholds.outlier_multiplier()
        && median > 0.0
}

fn is_content_focused(ratios: &GuideRatios, stats: &PopulationStats) -> bool {
    let median = stats.median_photos_per_tour;
    median > 0.0 && ratios.photos_per_tour >= median
}

fn is_high_performer(record: &GuideRecord, ratios: &GuideRatios, stats: &PopulationStats) -> bool {
    record.tours_done >= 3
        && record.tours_done >= stats.tours_done_percentile_cut
        && ratios.requests_per_tour <= stats.median_requests_per_tour
        && record.has_photo_activity()
}
