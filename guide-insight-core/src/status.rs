//! Status tags and watchlist reasons assigned by the classifier.
//!
//! Both enums are closed so matches stay exhaustive.
//!
//! # Examples
//! ```
//! use guide_insight_core::StatusTag;
//!
//! assert_eq!(StatusTag::HighPerformer.as_str(), "high_performer");
//! assert_eq!(StatusTag::NeedsAttention.label(), "Needs attention");
//! assert!(StatusTag::Emerging.is_lifecycle());
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A categorical tag attached to a classified guide.
///
/// Variant order is the order used for chart legends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatusTag {
    /// No tours led yet.
    Inactive,
    /// One or two tours led.
    New,
    /// Three to five tours led.
    Emerging,
    /// More than five tours led.
    Consistent,
    /// Above-median volume with restrained client-info requests.
    HighPerformer,
    /// Both low photo activity and frequent client-info requests.
    NeedsAttention,
    /// Photos per tour at or above the population median.
    ContentFocused,
    /// Photos per tour below one or well below the median.
    LowPhotoActivity,
    /// Client-info requests well above the median.
    HighClientInfoRequests,
}

impl StatusTag {
    /// Every tag, in legend order.
    pub const ALL: [Self; 9] = [
        Self::Inactive,
        Self::New,
        Self::Emerging,
        Self::Consistent,
        Self::HighPerformer,
        Self::NeedsAttention,
        Self::ContentFocused,
        Self::LowPhotoActivity,
        Self::HighClientInfoRequests,
    ];

    /// Return the tag's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::New => "new",
            Self::Emerging => "emerging",
            Self::Consistent => "consistent",
            Self::HighPerformer => "high_performer",
            Self::NeedsAttention => "needs_attention",
            Self::ContentFocused => "content_focused",
            Self::LowPhotoActivity => "low_photo_activity",
            Self::HighClientInfoRequests => "high_client_info_requests",
        }
    }

    /// Human-readable label for dashboards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inactive => "Inactive",
            Self::New => "New",
            Self::Emerging => "Emerging",
            Self::Consistent => "Consistent",
            Self::HighPerformer => "High performer",
            Self::NeedsAttention => "Needs attention",
            Self::ContentFocused => "Content focused",
            Self::LowPhotoActivity => "Low photo activity",
            Self::HighClientInfoRequests => "High client-info requests",
        }
    }

    /// Whether the tag is one of the mutually exclusive lifecycle stages.
    #[must_use]
    pub const fn is_lifecycle(self) -> bool {
        matches!(
            self,
            Self::Inactive | Self::New | Self::Emerging | Self::Consistent
        )
    }

    /// Lifecycle stage for a raw tour count.
    ///
    /// # Examples
    /// ```
    /// use guide_insight_core::StatusTag;
    ///
    /// assert_eq!(StatusTag::lifecycle(0), StatusTag::Inactive);
    /// assert_eq!(StatusTag::lifecycle(2), StatusTag::New);
    /// assert_eq!(StatusTag::lifecycle(5), StatusTag::Emerging);
    /// assert_eq!(StatusTag::lifecycle(6), StatusTag::Consistent);
    /// ```
    #[must_use]
    pub const fn lifecycle(tours_done: u64) -> Self {
        match tours_done {
            0 => Self::Inactive,
            1..=2 => Self::New,
            3..=5 => Self::Emerging,
            _ => Self::Consistent,
        }
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tag or reason code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct StatusParseError {
    kind: &'static str,
    value: String,
}

impl FromStr for StatusTag {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == wanted)
            .ok_or_else(|| StatusParseError {
                kind: "status tag",
                value: s.to_owned(),
            })
    }
}

/// Human-readable reason a guide appears on the watchlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum WatchlistReason {
    /// Fewer than one photo per tour.
    LessThanOnePhotoPerTour,
    /// Photos per tour well below the population median.
    LessPhotosThanAverage,
    /// Client-info requests well above the population median.
    OftenRequestsClientInfo,
}

impl WatchlistReason {
    /// Return the reason's wire code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LessThanOnePhotoPerTour => "lessThanOnePhotoPerTour",
            Self::LessPhotosThanAverage => "lessPhotosThanAverage",
            Self::OftenRequestsClientInfo => "oftenRequestsClientInfo",
        }
    }

    /// Human-readable description for dashboards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LessThanOnePhotoPerTour => "Takes less than one photo per tour",
            Self::LessPhotosThanAverage => "Takes fewer photos than average",
            Self::OftenRequestsClientInfo => "Often requests client information",
        }
    }
}

impl fmt::Display for WatchlistReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatchlistReason {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::LessThanOnePhotoPerTour,
            Self::LessPhotosThanAverage,
            Self::OftenRequestsClientInfo,
        ]
        .into_iter()
        .find(|reason| reason.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| StatusParseError {
            kind: "watchlist reason",
            value: s.to_owned(),
        })
    }
}
