//! Behavioural scoring and watchlist classification for tour guides.
//!
//! The analyzer takes one snapshot of raw guide performance rows and runs a
//! single synchronous pass over it:
//! - **Metric derivation** turns counters into photos-per-tour and
//!   requests-per-tour ratios, guarding guides without tours.
//! - **Population statistics** collect the min/max ranges used for
//!   normalisation and the medians used as classification thresholds.
//! - **Engagement scoring** blends normalised volume, photo output and
//!   (inverted) client-info requests into a score in `0.0..=1.0`.
//! - **Status classification** assigns a lifecycle tag plus issue and
//!   positive tags.
//! - **Aggregation** builds leaderboards, the watchlist, KPI totals and the
//!   primary-status distribution.
//!
//! Everything is recomputed from scratch on each call; nothing is cached.
//!
//! # Examples
//!
//! ```
//! use guide_insight_analyzer::analyze;
//! use guide_insight_core::{GuideRecord, RankingMode, WatchlistReason};
//!
//! let analysis = analyze(vec![
//!     GuideRecord::new("a")
//!         .with_tours_done(10)
//!         .with_photos_taken_amount(2)
//!         .with_requested_client_info(10),
//!     GuideRecord::new("b")
//!         .with_tours_done(10)
//!         .with_photos_taken_amount(20)
//!         .with_requested_client_info(1),
//! ]);
//!
//! let watchlist = analysis.watchlist();
//! assert_eq!(watchlist.len(), 1);
//! assert_eq!(
//!     watchlist[0].watchlist_reasons,
//!     [
//!         WatchlistReason::LessThanOnePhotoPerTour,
//!         WatchlistReason::OftenRequestsClientInfo,
//!     ]
//! );
//! assert_eq!(analysis.leaderboard(RankingMode::PhotosPerTour).len(), 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
mod analysis;
mod classify;
mod display;
mod engagement;
mod population;
mod ratios;

pub use aggregate::{DEFAULT_LEADERBOARD_SIZE, KpiTotals, leaderboard, status_distribution, watchlist};
pub use analysis::{ClassifiedGuide, DerivedGuideMetrics, GuideAnalysis, analyze, analyze_with};
pub use classify::{IssueFlags, classify, issue_flags, watchlist_reasons};
pub use display::{DisplayFilter, SortDirection, SortField, SortParseError};
pub use engagement::{
    PHOTOS_PER_TOUR_WEIGHT, REQUESTS_PER_TOUR_WEIGHT, TOURS_WEIGHT, engagement_score,
};
pub use population::{PopulationStats, ValueRange, median, normalize};
pub use ratios::{GuideRatios, derive_ratios};

#[cfg(test)]
mod tests;
