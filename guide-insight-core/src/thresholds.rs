//! Thresholds that turn population medians into classification cut-offs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default fraction of the median photos-per-tour below which activity is low.
pub const BELOW_AVERAGE_THRESHOLD: f64 = 0.5;
/// Default multiple of the median requests-per-tour above which requests are high.
pub const OUTLIER_MULTIPLIER: f64 = 2.0;
/// Default absolute request count a guide must exceed before being flagged.
pub const MIN_CLIENT_INFO_REQUESTS: u64 = 3;

/// Errors raised when constructing [`AnalyzerThresholds`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThresholdError {
    /// The below-average fraction was negative or not finite.
    #[error("below-average threshold must be finite and non-negative (got {0})")]
    InvalidBelowAverage(f64),
    /// The outlier multiplier was negative or not finite.
    #[error("outlier multiplier must be finite and non-negative (got {0})")]
    InvalidOutlierMultiplier(f64),
}

/// Classification thresholds applied against population medians.
///
/// # Examples
/// ```
/// use guide_insight_core::AnalyzerThresholds;
///
/// let defaults = AnalyzerThresholds::default();
/// assert_eq!(defaults.below_average_threshold(), 0.5);
/// assert_eq!(defaults.outlier_multiplier(), 2.0);
/// assert_eq!(defaults.min_client_info_requests(), 3);
///
/// assert!(AnalyzerThresholds::new(f64::NAN, 2.0, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnalyzerThresholds {
    below_average_threshold: f64,
    outlier_multiplier: f64,
    min_client_info_requests: u64,
}

impl AnalyzerThresholds {
    /// Validate and construct thresholds.
    ///
    /// # Errors
    /// Returns [`ThresholdError`] when either ratio is negative or not finite.
    pub fn new(
        below_average_threshold: f64,
        outlier_multiplier: f64,
        min_client_info_requests: u64,
    ) -> Result<Self, ThresholdError> {
        if !is_usable_ratio(below_average_threshold) {
            return Err(ThresholdError::InvalidBelowAverage(below_average_threshold));
        }
        if !is_usable_ratio(outlier_multiplier) {
            return Err(ThresholdError::InvalidOutlierMultiplier(outlier_multiplier));
        }
        Ok(Self {
            below_average_threshold,
            outlier_multiplier,
            min_client_info_requests,
        })
    }

    /// Fraction of the median photos-per-tour that counts as "low".
    #[must_use]
    pub const fn below_average_threshold(&self) -> f64 {
        self.below_average_threshold
    }

    /// Multiple of the median requests-per-tour that counts as "high".
    #[must_use]
    pub const fn outlier_multiplier(&self) -> f64 {
        self.outlier_multiplier
    }

    /// Request count that must be exceeded before requests can be flagged.
    #[must_use]
    pub const fn min_client_info_requests(&self) -> u64 {
        self.min_client_info_requests
    }
}

impl Default for AnalyzerThresholds {
    fn default() -> Self {
        Self {
            below_average_threshold: BELOW_AVERAGE_THRESHOLD,
            outlier_multiplier: OUTLIER_MULTIPLIER,
            min_client_info_requests: MIN_CLIENT_INFO_REQUESTS,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for AnalyzerThresholds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            #[serde(default = "default_below_average")]
            below_average_threshold: f64,
            #[serde(default = "default_outlier_multiplier")]
            outlier_multiplier: f64,
            #[serde(default = "default_min_requests")]
            min_client_info_requests: u64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(
            raw.below_average_threshold,
            raw.outlier_multiplier,
            raw.min_client_info_requests,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
const fn default_below_average() -> f64 {
    BELOW_AVERAGE_THRESHOLD
}

#[cfg(feature = "serde")]
const fn default_outlier_multiplier() -> f64 {
    OUTLIER_MULTIPLIER
}

#[cfg(feature = "serde")]
const fn default_min_requests() -> u64 {
    MIN_CLIENT_INFO_REQUESTS
}

const fn is_usable_ratio(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
