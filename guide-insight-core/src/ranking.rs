//! Ranking keys offered by the leaderboard.
//!
//! # Examples
//! ```
//! use guide_insight_core::RankingMode;
//!
//! assert_eq!("tours-done".parse::<RankingMode>(), Ok(RankingMode::ToursDone));
//! assert_eq!("photosPerTour".parse::<RankingMode>(), Ok(RankingMode::PhotosPerTour));
//! assert_eq!(RankingMode::default(), RankingMode::EngagementScore);
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column a leaderboard is sorted by, always descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum RankingMode {
    /// Weighted engagement score.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "engagement-score"))]
    EngagementScore,
    /// Raw tour count.
    #[cfg_attr(feature = "serde", serde(alias = "tours-done"))]
    ToursDone,
    /// Photos taken per tour.
    #[cfg_attr(feature = "serde", serde(alias = "photos-per-tour"))]
    PhotosPerTour,
    /// Client-info requests per tour.
    #[cfg_attr(feature = "serde", serde(alias = "requests-per-tour"))]
    RequestsPerTour,
}

impl RankingMode {
    /// Every ranking mode.
    pub const ALL: [Self; 4] = [
        Self::EngagementScore,
        Self::ToursDone,
        Self::PhotosPerTour,
        Self::RequestsPerTour,
    ];

    /// Return the mode as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EngagementScore => "engagement-score",
            Self::ToursDone => "tours-done",
            Self::PhotosPerTour => "photos-per-tour",
            Self::RequestsPerTour => "requests-per-tour",
        }
    }
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown ranking mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ranking mode '{0}' (expected one of engagement-score, tours-done, photos-per-tour, requests-per-tour)")]
pub struct RankingModeParseError(String);

impl FromStr for RankingMode {
    type Err = RankingModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match wanted.as_str() {
            "engagementscore" | "engagement" | "score" => Ok(Self::EngagementScore),
            "toursdone" | "tours" => Ok(Self::ToursDone),
            "photospertour" | "photos" => Ok(Self::PhotosPerTour),
            "requestspertour" | "requests" => Ok(Self::RequestsPerTour),
            _ => Err(RankingModeParseError(s.to_owned())),
        }
    }
}
