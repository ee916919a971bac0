//! Raw guide performance rows.
//!
//! A [`GuideRecord`] mirrors one row of the backend's guide performance
//! table. The record is never mutated by analysis; derived values live in
//! the analyzer crate.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a guide as stored by the backend.
///
/// Rows may carry either numeric or textual keys, so both are accepted.
/// Integer identifiers order before textual ones.
///
/// # Examples
/// ```
/// use guide_insight_core::GuideId;
///
/// assert_eq!(GuideId::from(7).to_string(), "7");
/// assert_eq!(GuideId::from("g-12").to_string(), "g-12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum GuideId {
    /// Integer primary key.
    Int(i64),
    /// Textual key such as a UUID.
    Text(String),
}

impl From<i64> for GuideId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for GuideId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for GuideId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for GuideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One guide's raw performance counters.
///
/// Counts that are missing, `null`, negative or otherwise unreadable are
/// stored as `0` when deserialising.
///
/// # Examples
/// ```
/// use guide_insight_core::GuideRecord;
///
/// let guide = GuideRecord::new(1)
///     .with_name("Ana")
///     .with_tours_done(4)
///     .with_photos_taken_amount(12);
/// assert_eq!(guide.tours_done, 4);
/// assert!(!guide.is_favourite);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GuideRecord {
    /// Unique identifier.
    pub id: GuideId,
    /// Optional display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Number of tours led.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::coerce::count")
    )]
    pub tours_done: u64,
    /// Total number of photos taken.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::coerce::count")
    )]
    pub photos_taken_amount: u64,
    /// Number of distinct photo moments.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::coerce::count")
    )]
    pub photos_taken_frequency: u64,
    /// Number of client-info requests raised.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::coerce::count")
    )]
    pub requested_client_info: u64,
    /// Display-only favourite marker.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::coerce::flag")
    )]
    pub is_favourite: bool,
}

impl GuideRecord {
    /// Create a record with every counter at zero.
    #[must_use]
    pub fn new(id: impl Into<GuideId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            tours_done: 0,
            photos_taken_amount: 0,
            photos_taken_frequency: 0,
            requested_client_info: 0,
            is_favourite: false,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the number of tours led.
    #[must_use]
    pub const fn with_tours_done(mut self, tours_done: u64) -> Self {
        self.tours_done = tours_done;
        self
    }

    /// Set the total number of photos taken.
    #[must_use]
    pub const fn with_photos_taken_amount(mut self, amount: u64) -> Self {
        self.photos_taken_amount = amount;
        self
    }

    /// Set the number of distinct photo moments.
    #[must_use]
    pub const fn with_photos_taken_frequency(mut self, frequency: u64) -> Self {
        self.photos_taken_frequency = frequency;
        self
    }

    /// Set the number of client-info requests.
    #[must_use]
    pub const fn with_requested_client_info(mut self, requests: u64) -> Self {
        self.requested_client_info = requests;
        self
    }

    /// Mark or unmark the guide as a favourite.
    #[must_use]
    pub const fn with_favourite(mut self, is_favourite: bool) -> Self {
        self.is_favourite = is_favourite;
        self
    }

    /// Name to show in tables, falling back to the identifier.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| format!("Guide {}", self.id), str::to_owned)
    }

    /// Whether the guide recorded any photo activity at all.
    #[must_use]
    pub const fn has_photo_activity(&self) -> bool {
        self.photos_taken_amount > 0 || self.photos_taken_frequency > 0
    }
}
