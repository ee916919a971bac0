//! Core domain types for guide behaviour analysis.
//!
//! These types describe the raw performance rows exported for each tour
//! guide, the closed set of status tags the classifier can assign, and the
//! thresholds that drive classification. Count fields are lenient on input:
//! anything missing or malformed reads as `0`, so downstream arithmetic never
//! observes a null.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod guide;
pub mod ranking;
pub mod status;
pub mod thresholds;

#[cfg(feature = "serde")]
mod coerce;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use guide::{GuideId, GuideRecord};
pub use ranking::{RankingMode, RankingModeParseError};
pub use status::{StatusParseError, StatusTag, WatchlistReason};
pub use thresholds::{AnalyzerThresholds, ThresholdError};
