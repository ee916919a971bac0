//! Population-wide statistics used for normalisation and thresholds.
//!
//! Statistics are always computed over the complete snapshot of guides handed
//! to the analyzer. Display filters run afterwards and never feed back into
//! these values.

use guide_insight_core::GuideRecord;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::ratios::{GuideRatios, derive_ratios};

/// Map `value` linearly from `min..=max` onto `0.0..=1.0`.
///
/// Returns `0.5` when the range is degenerate so identical populations are
/// not pushed towards either end of the scale.
///
/// # Examples
/// ```
/// use guide_insight_analyzer::normalize;
///
/// assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
/// assert_eq!(normalize(10.0, 0.0, 10.0), 1.0);
/// assert_eq!(normalize(42.0, 3.0, 3.0), 0.5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::float_cmp,
    reason = "normalisation is a linear rescale guarded against an empty range"
)]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if min == max {
        return 0.5;
    }
    (value - min) / (max - min)
}

/// Element at index `len / 2` of the ascending-sorted values.
///
/// Even-length inputs yield the upper of the two middle elements; nothing is
/// averaged. An empty slice yields `0.0`.
///
/// # Examples
/// ```
/// use guide_insight_analyzer::median;
///
/// assert_eq!(median(&[]), 0.0);
/// assert_eq!(median(&[5.0]), 5.0);
/// assert_eq!(median(&[7.0, 1.0, 5.0, 3.0]), 5.0);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    middle(&sorted).copied().unwrap_or(0.0)
}

#[expect(
    clippy::integer_division,
    reason = "the middle index deliberately floors"
)]
fn middle<T>(sorted: &[T]) -> Option<&T> {
    sorted.get(sorted.len() / 2)
}

/// Observed minimum and maximum of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ValueRange {
    /// Smallest observed value.
    pub min: f64,
    /// Largest observed value.
    pub max: f64,
}

impl ValueRange {
    /// Fold values into a range; an empty iterator yields `0.0..=0.0`.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        values
            .into_iter()
            .fold(None, |range: Option<Self>, value| {
                Some(range.map_or(
                    Self {
                        min: value,
                        max: value,
                    },
                    |current| Self {
                        min: current.min.min(value),
                        max: current.max.max(value),
                    },
                ))
            })
            .unwrap_or_default()
    }

    /// Normalise `value` against this range.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        normalize(value, self.min, self.max)
    }
}

/// Statistics computed once per snapshot of the guide population.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PopulationStats {
    /// Number of guides the statistics were computed over.
    pub guide_count: usize,
    /// Range of tours led.
    pub tours_done: ValueRange,
    /// Range of photos per tour.
    pub photos_per_tour: ValueRange,
    /// Range of client-info requests per tour.
    pub requests_per_tour: ValueRange,
    /// Median photos per tour.
    pub median_photos_per_tour: f64,
    /// Median client-info requests per tour.
    pub median_requests_per_tour: f64,
    /// Tours led by the guide at the 50th-percentile rank, counted from the
    /// busiest guide.
    pub tours_done_percentile_cut: u64,
}

impl PopulationStats {
    /// Compute statistics over every record in the snapshot.
    ///
    /// # Examples
    /// ```
    /// use guide_insight_analyzer::PopulationStats;
    /// use guide_insight_core::GuideRecord;
    ///
    /// let stats = PopulationStats::from_records(&[
    ///     GuideRecord::new(1).with_tours_done(2).with_photos_taken_amount(4),
    ///     GuideRecord::new(2).with_tours_done(10).with_photos_taken_amount(10),
    /// ]);
    /// assert_eq!(stats.tours_done.max, 10.0);
    /// assert_eq!(stats.median_photos_per_tour, 2.0);
    /// ```
    #[must_use]
    pub fn from_records(records: &[GuideRecord]) -> Self {
        let ratios: Vec<GuideRatios> = records.iter().map(derive_ratios).collect();
        Self::from_snapshot(records, &ratios)
    }

    /// Compute statistics from records paired with their derived ratios.
    #[expect(
        clippy::cast_precision_loss,
        reason = "tour counts are far below the f64 mantissa limit"
    )]
    pub(crate) fn from_snapshot(records: &[GuideRecord], ratios: &[GuideRatios]) -> Self {
        let photos: Vec<f64> = ratios.iter().map(|r| r.photos_per_tour).collect();
        let requests: Vec<f64> = ratios.iter().map(|r| r.requests_per_tour).collect();

        let mut tours_descending: Vec<u64> = records.iter().map(|r| r.tours_done).collect();
        tours_descending.sort_unstable_by(|a, b| b.cmp(a));

        Self {
            guide_count: records.len(),
            tours_done: ValueRange::from_values(records.iter().map(|r| r.tours_done as f64)),
            photos_per_tour: ValueRange::from_values(photos.iter().copied()),
            requests_per_tour: ValueRange::from_values(requests.iter().copied()),
            median_photos_per_tour: median(&photos),
            median_requests_per_tour: median(&requests),
            tours_done_percentile_cut: middle(&tours_descending).copied().unwrap_or(0),
        }
    }
}
