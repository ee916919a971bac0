//! Per-guide ratios derived from raw counters.

use guide_insight_core::GuideRecord;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Photo and request rates for a single guide.
///
/// Both ratios are `0.0` when the guide has not led any tours, so they are
/// always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GuideRatios {
    /// Photos taken divided by tours led.
    pub photos_per_tour: f64,
    /// Client-info requests divided by tours led.
    pub requests_per_tour: f64,
}

/// Derive photo and request rates from a guide's counters.
///
/// # Examples
/// ```
/// use guide_insight_analyzer::derive_ratios;
/// use guide_insight_core::GuideRecord;
///
/// let guide = GuideRecord::new(1)
///     .with_tours_done(4)
///     .with_photos_taken_amount(10)
///     .with_requested_client_info(2);
/// let ratios = derive_ratios(&guide);
/// assert_eq!(ratios.photos_per_tour, 2.5);
/// assert_eq!(ratios.requests_per_tour, 0.5);
///
/// let idle = derive_ratios(&GuideRecord::new(2).with_photos_taken_amount(3));
/// assert_eq!(idle.photos_per_tour, 0.0);
/// ```
#[must_use]
pub fn derive_ratios(record: &GuideRecord) -> GuideRatios {
    GuideRatios {
        photos_per_tour: per_tour(record.photos_taken_amount, record.tours_done),
        requests_per_tour: per_tour(record.requested_client_info, record.tours_done),
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "rates divide bounded counters as floating-point values"
)]
fn per_tour(count: u64, tours_done: u64) -> f64 {
    if tours_done == 0 {
        return 0.0;
    }
    count as f64 / tours_done as f64
}
