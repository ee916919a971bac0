//! Weighted engagement score.

use guide_insight_core::GuideRecord;

use crate::population::PopulationStats;
use crate::ratios::GuideRatios;

/// Weight applied to normalised tour volume.
pub const TOURS_WEIGHT: f64 = 0.45;
/// Weight applied to normalised photos per tour.
pub const PHOTOS_PER_TOUR_WEIGHT: f64 = 0.35;
/// Weight applied to the inverted, normalised requests per tour.
pub const REQUESTS_PER_TOUR_WEIGHT: f64 = 0.20;

/// Combine a guide's normalised metrics into a score in `0.0..=1.0`.
///
/// Fewer client-info requests than peers raise the score; the request term
/// is inverted before weighting.
///
/// # Examples
/// ```
/// use guide_insight_analyzer::{PopulationStats, derive_ratios, engagement_score};
/// use guide_insight_core::GuideRecord;
///
/// let guide = GuideRecord::new(1);
/// let stats = PopulationStats::from_records(std::slice::from_ref(&guide));
/// let score = engagement_score(&guide, &derive_ratios(&guide), &stats);
/// assert!((score - 0.5).abs() < 1e-12);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the score is a weighted sum of normalised floating-point metrics"
)]
pub fn engagement_score(
    record: &GuideRecord,
    ratios: &GuideRatios,
    stats: &PopulationStats,
) -> f64 {
    let tours = stats.tours_done.normalize(record.tours_done as f64);
    let photos = stats.photos_per_tour.normalize(ratios.photos_per_tour);
    let requests = stats.requests_per_tour.normalize(ratios.requests_per_tour);

    let score = TOURS_WEIGHT * tours
        + PHOTOS_PER_TOUR_WEIGHT * photos
        + REQUESTS_PER_TOUR_WEIGHT * (1.0 - requests);
    sanitise(score)
}

/// Clamp a raw score into `0.0..=1.0`, mapping non-finite values to `0.0`.
fn sanitise(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}
