//! Display-layer filtering and sorting of classified guides.
//!
//! Filters only choose which rows are shown and in what order. They operate
//! on a finished [`GuideAnalysis`](crate::GuideAnalysis) so they can never
//! shift the thresholds the guides were classified against.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::ClassifiedGuide;

/// Table column a display filter can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SortField {
    /// Guide identifier.
    Id,
    /// Display name.
    Name,
    /// Tours led.
    #[cfg_attr(feature = "serde", serde(alias = "tours-done"))]
    ToursDone,
    /// Total photos taken.
    #[cfg_attr(feature = "serde", serde(alias = "photos-taken-amount"))]
    PhotosTakenAmount,
    /// Distinct photo moments.
    #[cfg_attr(feature = "serde", serde(alias = "photos-taken-frequency"))]
    PhotosTakenFrequency,
    /// Client-info requests.
    #[cfg_attr(feature = "serde", serde(alias = "requested-client-info"))]
    RequestedClientInfo,
    /// Photos per tour.
    #[cfg_attr(feature = "serde", serde(alias = "photos-per-tour"))]
    PhotosPerTour,
    /// Client-info requests per tour.
    #[cfg_attr(feature = "serde", serde(alias = "requests-per-tour"))]
    RequestsPerTour,
    /// Engagement score.
    #[cfg_attr(feature = "serde", serde(alias = "engagement-score"))]
    EngagementScore,
}

impl SortField {
    /// Every sortable column.
    pub const ALL: [Self; 9] = [
        Self::Id,
        Self::Name,
        Self::ToursDone,
        Self::PhotosTakenAmount,
        Self::PhotosTakenFrequency,
        Self::RequestedClientInfo,
        Self::PhotosPerTour,
        Self::RequestsPerTour,
        Self::EngagementScore,
    ];

    /// Return the column as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::ToursDone => "tours-done",
            Self::PhotosTakenAmount => "photos-taken-amount",
            Self::PhotosTakenFrequency => "photos-taken-frequency",
            Self::RequestedClientInfo => "requested-client-info",
            Self::PhotosPerTour => "photos-per-tour",
            Self::RequestsPerTour => "requests-per-tour",
            Self::EngagementScore => "engagement-score",
        }
    }

    fn compare(self, a: &ClassifiedGuide, b: &ClassifiedGuide) -> Ordering {
        match self {
            Self::Id => a.record.id.cmp(&b.record.id),
            Self::Name => a
                .record
                .display_name()
                .to_lowercase()
                .cmp(&b.record.display_name().to_lowercase()),
            Self::ToursDone => a.record.tours_done.cmp(&b.record.tours_done),
            Self::PhotosTakenAmount => a
                .record
                .photos_taken_amount
                .cmp(&b.record.photos_taken_amount),
            Self::PhotosTakenFrequency => a
                .record
                .photos_taken_frequency
                .cmp(&b.record.photos_taken_frequency),
            Self::RequestedClientInfo => a
                .record
                .requested_client_info
                .cmp(&b.record.requested_client_info),
            Self::PhotosPerTour => a
                .metrics
                .photos_per_tour
                .total_cmp(&b.metrics.photos_per_tour),
            Self::RequestsPerTour => a
                .metrics
                .requests_per_tour
                .total_cmp(&b.metrics.requests_per_tour),
            Self::EngagementScore => a
                .metrics
                .engagement_score
                .total_cmp(&b.metrics.engagement_score),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort field or direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortParseError {
    /// The column name matched no [`SortField`].
    #[error("unknown sort field '{0}'")]
    Field(String),
    /// The direction was neither ascending nor descending.
    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    Direction(String),
}

impl FromStr for SortField {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalise_key(s);
        Self::ALL
            .into_iter()
            .find(|field| normalise_key(field.as_str()) == wanted)
            .ok_or_else(|| SortParseError::Field(s.to_owned()))
    }
}

/// Direction of a display sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SortDirection {
    /// Smallest first.
    #[cfg_attr(feature = "serde", serde(alias = "asc"))]
    Ascending,
    /// Largest first.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "desc"))]
    Descending,
}

impl FromStr for SortDirection {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_key(s).as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(SortParseError::Direction(s.to_owned())),
        }
    }
}

fn normalise_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Search, favourites and sort selection for a guide table.
///
/// # Examples
/// ```
/// use guide_insight_analyzer::{DisplayFilter, SortDirection, SortField, analyze};
/// use guide_insight_core::GuideRecord;
///
/// let analysis = analyze(vec![
///     GuideRecord::new(1).with_name("Ana").with_tours_done(3),
///     GuideRecord::new(2).with_name("Bruno").with_tours_done(9).with_favourite(true),
///     GuideRecord::new(3).with_name("Anabel").with_tours_done(6).with_favourite(true),
/// ]);
/// let filter = DisplayFilter::new()
///     .with_search("ana")
///     .sorted_by(SortField::ToursDone, SortDirection::Descending);
/// let names: Vec<String> = filter
///     .apply(analysis.guides())
///     .iter()
///     .map(|guide| guide.record.display_name())
///     .collect();
/// assert_eq!(names, ["Anabel", "Ana"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFilter {
    search: Option<String>,
    favourites_only: bool,
    sort: Option<(SortField, SortDirection)>,
}

impl DisplayFilter {
    /// A filter that shows every guide in input order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep guides whose name or id contains `query`, ignoring case.
    ///
    /// Blank queries match everything.
    #[must_use]
    pub fn with_search(mut self, query: impl AsRef<str>) -> Self {
        let trimmed = query.as_ref().trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        self
    }

    /// Keep only guides marked as favourites.
    #[must_use]
    pub const fn favourites_only(mut self, enabled: bool) -> Self {
        self.favourites_only = enabled;
        self
    }

    /// Sort matching guides by `field`.
    #[must_use]
    pub const fn sorted_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort = Some((field, direction));
        self
    }

    /// Whether `guide` passes the search and favourites criteria.
    #[must_use]
    pub fn matches(&self, guide: &ClassifiedGuide) -> bool {
        if self.favourites_only && !guide.record.is_favourite {
            return false;
        }
        self.search.as_deref().is_none_or(|query| {
            guide.record.display_name().to_lowercase().contains(query)
                || guide.record.id.to_string().to_lowercase().contains(query)
        })
    }

    /// Select and order the guides to display.
    #[must_use]
    pub fn apply<'a>(&self, guides: &'a [ClassifiedGuide]) -> Vec<&'a ClassifiedGuide> {
        let mut shown: Vec<&ClassifiedGuide> =
            guides.iter().filter(|guide| self.matches(guide)).collect();
        if let Some((field, direction)) = self.sort {
            shown.sort_by(|a, b| match direction {
                SortDirection::Ascending => field.compare(a, b),
                SortDirection::Descending => field.compare(b, a),
            });
        }
        shown
    }
}
