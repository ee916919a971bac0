//! Unit coverage for the guide analysis pipeline.
#![forbid(unsafe_code)]

use guide_insight_core::test_support::{guide, sample_population};
use guide_insight_core::{
    AnalyzerThresholds, GuideId, GuideRecord, RankingMode, StatusTag, WatchlistReason,
};
use rstest::{fixture, rstest};

use crate::{
    DisplayFilter, GuideAnalysis, IssueFlags, PopulationStats, SortDirection, SortField,
    SortParseError, ValueRange, analyze, analyze_with, derive_ratios, issue_flags, median,
    normalize,
};

const TOLERANCE: f64 = 1e-9;

#[fixture]
fn sample() -> GuideAnalysis {
    analyze(sample_population())
}

fn ids(guides: &[&crate::ClassifiedGuide]) -> Vec<GuideId> {
    guides.iter().map(|guide| guide.record.id.clone()).collect()
}

fn int_ids(raw: &[i64]) -> Vec<GuideId> {
    raw.iter().copied().map(GuideId::Int).collect()
}

fn statuses_of(analysis: &GuideAnalysis, id: i64) -> Vec<StatusTag> {
    analysis
        .find(&GuideId::Int(id))
        .map(|guide| guide.metrics.statuses.clone())
        .unwrap_or_else(|| panic!("guide {id} should be analysed"))
}

#[rstest]
#[case(0, 10, 10)]
#[case(0, 0, 0)]
fn ratios_are_zero_without_tours(#[case] tours: u64, #[case] photos: u64, #[case] requests: u64) {
    let ratios = derive_ratios(&guide(1, tours, photos, requests));
    assert_eq!(ratios.photos_per_tour, 0.0);
    assert_eq!(ratios.requests_per_tour, 0.0);
}

#[rstest]
fn ratios_divide_by_tours() {
    let ratios = derive_ratios(&guide(1, 8, 20, 2));
    assert!((ratios.photos_per_tour - 2.5).abs() < TOLERANCE);
    assert!((ratios.requests_per_tour - 0.25).abs() < TOLERANCE);
}

#[rstest]
#[case(0.0)]
#[case(-3.0)]
#[case(1e9)]
fn normalize_is_half_for_degenerate_range(#[case] value: f64) {
    assert_eq!(normalize(value, 4.0, 4.0), 0.5);
}

#[rstest]
#[case(0.0, 0.0)]
#[case(2.5, 0.25)]
#[case(10.0, 1.0)]
fn normalize_rescales_linearly(#[case] value: f64, #[case] expected: f64) {
    assert!((normalize(value, 0.0, 10.0) - expected).abs() < TOLERANCE);
}

#[rstest]
#[case(&[], 0.0)]
#[case(&[5.0], 5.0)]
#[case(&[1.0, 3.0, 5.0, 7.0], 5.0)]
#[case(&[7.0, 1.0, 3.0], 3.0)]
#[case(&[1.0, 0.1], 1.0)]
fn median_takes_index_half_of_sorted(#[case] values: &[f64], #[case] expected: f64) {
    assert_eq!(median(values), expected);
}

#[rstest]
fn value_range_of_nothing_is_zero() {
    assert_eq!(
        ValueRange::from_values(std::iter::empty()),
        ValueRange { min: 0.0, max: 0.0 }
    );
}

#[rstest]
fn empty_population_degenerates_cleanly() {
    let analysis = analyze(Vec::new());
    assert!(analysis.is_empty());
    assert_eq!(analysis.stats(), &PopulationStats::default());
    assert!(analysis.leaderboard(RankingMode::EngagementScore).is_empty());
    assert!(analysis.watchlist().is_empty());
    assert!(analysis.status_distribution().is_empty());
    assert_eq!(analysis.kpi_totals(), crate::KpiTotals::default());
}

#[rstest]
fn population_stats_cover_the_whole_snapshot(sample: GuideAnalysis) {
    let stats = sample.stats();
    assert_eq!(stats.guide_count, 6);
    assert_eq!(stats.tours_done, ValueRange { min: 0.0, max: 12.0 });
    assert_eq!(stats.photos_per_tour, ValueRange { min: 0.0, max: 5.0 });
    assert_eq!(stats.requests_per_tour, ValueRange { min: 0.0, max: 1.25 });
    assert!((stats.median_photos_per_tour - 2.5).abs() < TOLERANCE);
    assert!((stats.median_requests_per_tour - 0.25).abs() < TOLERANCE);
    assert_eq!(stats.tours_done_percentile_cut, 4);
}

#[rstest]
#[case(1, &[StatusTag::Inactive])]
#[case(2, &[StatusTag::New, StatusTag::ContentFocused])]
#[case(3, &[StatusTag::Emerging, StatusTag::NeedsAttention])]
#[case(
    4,
    &[StatusTag::Consistent, StatusTag::ContentFocused, StatusTag::HighPerformer]
)]
#[case(
    5,
    &[StatusTag::Consistent, StatusTag::ContentFocused, StatusTag::HighPerformer]
)]
#[case(6, &[StatusTag::Consistent, StatusTag::NeedsAttention])]
fn sample_population_statuses(
    sample: GuideAnalysis,
    #[case] id: i64,
    #[case] expected: &[StatusTag],
) {
    assert_eq!(statuses_of(&sample, id), expected);
}

#[rstest]
#[case(RankingMode::EngagementScore, &[5, 4, 2, 6, 1, 3])]
#[case(RankingMode::ToursDone, &[5, 6, 4, 3, 2, 1])]
#[case(RankingMode::PhotosPerTour, &[4, 2, 5, 3, 6, 1])]
#[case(RankingMode::RequestsPerTour, &[3, 6, 4, 5, 1, 2])]
fn leaderboard_orders_by_mode(
    sample: GuideAnalysis,
    #[case] mode: RankingMode,
    #[case] expected: &[i64],
) {
    assert_eq!(ids(&sample.leaderboard(mode)), int_ids(expected));
}

#[rstest]
fn leaderboard_is_capped_at_eight() {
    let records: Vec<GuideRecord> = (1..=12_i64)
        .map(|id| guide(id, id.unsigned_abs(), 0, 0))
        .collect();
    let analysis = analyze(records);
    let top = analysis.leaderboard(RankingMode::ToursDone);
    assert_eq!(top.len(), 8);
    assert_eq!(ids(&top), int_ids(&[12, 11, 10, 9, 8, 7, 6, 5]));
}

#[rstest]
fn leaderboard_respects_custom_limit(sample: GuideAnalysis) {
    let top = sample.leaderboard_with_limit(RankingMode::ToursDone, 2);
    assert_eq!(ids(&top), int_ids(&[5, 6]));
}

#[rstest]
fn watchlist_lists_flagged_guides_in_input_order(sample: GuideAnalysis) {
    let watchlist = sample.watchlist();
    assert_eq!(ids(&watchlist), int_ids(&[3, 6]));
    for entry in watchlist {
        assert_eq!(
            entry.watchlist_reasons,
            [
                WatchlistReason::LessThanOnePhotoPerTour,
                WatchlistReason::OftenRequestsClientInfo,
            ]
        );
    }
}

#[rstest]
fn kpi_totals_sum_raw_counters(sample: GuideAnalysis) {
    let totals = sample.kpi_totals();
    assert_eq!(totals.tours_done, 36);
    assert_eq!(totals.photos_taken_amount, 82);
    assert_eq!(totals.photos_taken_frequency, 28);
    assert_eq!(totals.requested_client_info, 20);
}

#[rstest]
fn status_distribution_counts_primary_statuses(sample: GuideAnalysis) {
    let distribution = sample.status_distribution();
    let counts: Vec<(StatusTag, usize)> = distribution.into_iter().collect();
    assert_eq!(
        counts,
        [
            (StatusTag::Inactive, 1),
            (StatusTag::New, 1),
            (StatusTag::Emerging, 1),
            (StatusTag::Consistent, 3),
        ]
    );
}

#[rstest]
fn engagement_scores_match_weighted_sum(sample: GuideAnalysis) {
    let expected = [
        (1, 0.2),
        (2, 0.485),
        (3, 0.185),
        (4, 0.81),
        (5, 0.811_666_666_666_666_7),
        (6, 0.411),
    ];
    for (id, score) in expected {
        let guide = sample
            .find(&GuideId::Int(id))
            .unwrap_or_else(|| panic!("guide {id} should be analysed"));
        let actual = guide.metrics.engagement_score;
        assert!(
            (actual - score).abs() < TOLERANCE,
            "guide {id}: expected {score}, got {actual}"
        );
    }
}

#[rstest]
fn single_inactive_guide_scores_half() {
    let analysis = analyze(vec![guide(1, 0, 0, 0)]);
    let only = analysis.guides().first().expect("one guide");
    assert_eq!(only.metrics.statuses, [StatusTag::Inactive]);
    assert!((only.metrics.engagement_score - 0.5).abs() < TOLERANCE);
    assert!(only.watchlist_reasons.is_empty());
}

#[rstest]
fn request_floor_suppresses_small_counts() {
    // Three requests never trip the flag, however high the rate.
    let analysis = analyze(vec![guide(1, 1, 5, 3), guide(2, 10, 50, 1), guide(3, 10, 50, 1)]);
    assert_eq!(statuses_of(&analysis, 1), [StatusTag::New, StatusTag::ContentFocused]);
}

#[rstest]
fn zero_median_requests_never_flags_requests() {
    let records = vec![guide(1, 4, 8, 0), guide(2, 4, 8, 0), guide(3, 4, 8, 9)];
    let analysis = analyze(records);
    let flags = issue_flags(
        &guide(3, 4, 8, 9),
        &derive_ratios(&guide(3, 4, 8, 9)),
        analysis.stats(),
        analysis.thresholds(),
    );
    assert_eq!(flags, IssueFlags::default());
}

#[rstest]
fn below_average_photos_flags_low_activity_only() {
    // Median photos per tour is 10, so 4 per tour is under half of it.
    let analysis = analyze(vec![guide(1, 4, 16, 0), guide(2, 4, 40, 0), guide(3, 4, 40, 0)]);
    assert_eq!(
        statuses_of(&analysis, 1),
        [StatusTag::Emerging, StatusTag::LowPhotoActivity]
    );
    let flagged = analysis.find(&GuideId::Int(1)).expect("guide 1");
    assert_eq!(
        flagged.watchlist_reasons,
        [WatchlistReason::LessPhotosThanAverage]
    );
}

#[rstest]
fn high_requests_alone_tag_high_client_info_requests() {
    let analysis = analyze(vec![guide(1, 4, 8, 8), guide(2, 4, 8, 1), guide(3, 4, 8, 1)]);
    assert_eq!(
        statuses_of(&analysis, 1),
        [
            StatusTag::Emerging,
            StatusTag::HighClientInfoRequests,
            StatusTag::ContentFocused,
        ]
    );
}

#[rstest]
fn custom_thresholds_change_classification() {
    let strict = AnalyzerThresholds::new(0.9, 2.0, 3).expect("valid thresholds");
    // Median photos per tour is 4; 3 per tour passes at 0.5 but not at 0.9.
    let records = vec![guide(1, 4, 12, 0), guide(2, 4, 16, 0), guide(3, 4, 16, 0)];
    let lenient = analyze(records.clone());
    let tightened = analyze_with(records, strict);
    assert_eq!(
        statuses_of(&lenient, 1),
        [StatusTag::Emerging, StatusTag::HighPerformer]
    );
    assert_eq!(
        statuses_of(&tightened, 1),
        [StatusTag::Emerging, StatusTag::LowPhotoActivity]
    );
}

#[rstest]
fn idle_cameras_never_make_high_performers() {
    let records = vec![guide(1, 9, 0, 0), guide(2, 3, 0, 0)];
    let analysis = analyze(records);
    assert_eq!(
        statuses_of(&analysis, 1),
        [StatusTag::Consistent, StatusTag::LowPhotoActivity]
    );
}

#[rstest]
fn display_filter_does_not_change_classification(sample: GuideAnalysis) {
    let favourites = DisplayFilter::new().favourites_only(true);
    let shown = favourites.apply(sample.guides());
    assert_eq!(ids(&shown), int_ids(&[2, 4]));

    let reclassified = analyze(sample_population());
    assert_eq!(reclassified, sample);
}

#[rstest]
#[case("ANA", &[1])]
#[case("6", &[6])]
#[case("   ", &[1, 2, 3, 4, 5, 6])]
#[case("zzz", &[])]
fn display_filter_searches_names_and_ids(
    sample: GuideAnalysis,
    #[case] query: &str,
    #[case] expected: &[i64],
) {
    let shown = DisplayFilter::new().with_search(query).apply(sample.guides());
    assert_eq!(ids(&shown), int_ids(expected));
}

#[rstest]
#[case(SortField::Name, SortDirection::Ascending, &[1, 2, 3, 4, 5, 6])]
#[case(SortField::RequestedClientInfo, SortDirection::Descending, &[6, 3, 4, 5, 1, 2])]
#[case(SortField::EngagementScore, SortDirection::Ascending, &[3, 1, 6, 2, 4, 5])]
fn display_filter_sorts(
    sample: GuideAnalysis,
    #[case] field: SortField,
    #[case] direction: SortDirection,
    #[case] expected: &[i64],
) {
    let shown = DisplayFilter::new()
        .sorted_by(field, direction)
        .apply(sample.guides());
    assert_eq!(ids(&shown), int_ids(expected));
}

#[rstest]
#[case("tours_done", SortField::ToursDone)]
#[case("engagementScore", SortField::EngagementScore)]
#[case("photos-per-tour", SortField::PhotosPerTour)]
fn sort_fields_parse(#[case] raw: &str, #[case] expected: SortField) {
    assert_eq!(raw.parse::<SortField>(), Ok(expected));
}

#[rstest]
fn unknown_sort_keys_report_what_was_wrong() {
    assert_eq!(
        "popularity".parse::<SortField>(),
        Err(SortParseError::Field("popularity".to_owned()))
    );
    let err = "sideways".parse::<SortDirection>().expect_err("unknown direction");
    assert_eq!(err, SortParseError::Direction("sideways".to_owned()));
    assert_eq!(
        err.to_string(),
        "unknown sort direction 'sideways' (expected asc or desc)"
    );
}

#[rstest]
#[case("\"tours-done\"", SortField::ToursDone)]
#[case("\"toursDone\"", SortField::ToursDone)]
#[case("\"engagement-score\"", SortField::EngagementScore)]
#[case("\"id\"", SortField::Id)]
fn sort_fields_deserialise_from_config_spellings(#[case] raw: &str, #[case] expected: SortField) {
    let field: SortField = serde_json::from_str(raw).expect("known sort field");
    assert_eq!(field, expected);
}

#[rstest]
#[case("\"asc\"", SortDirection::Ascending)]
#[case("\"ascending\"", SortDirection::Ascending)]
#[case("\"desc\"", SortDirection::Descending)]
fn sort_directions_deserialise_from_config_spellings(
    #[case] raw: &str,
    #[case] expected: SortDirection,
) {
    let direction: SortDirection = serde_json::from_str(raw).expect("known sort direction");
    assert_eq!(direction, expected);
}

#[rstest]
fn serialised_guides_flatten_record_and_metrics(sample: GuideAnalysis) {
    let carla = sample.find(&GuideId::Int(3)).expect("guide 3");
    let json = serde_json::to_value(carla).expect("serialise guide");
    assert_eq!(json["toursDone"], 4);
    assert_eq!(json["photosPerTour"], 0.5);
    assert_eq!(json["statuses"], serde_json::json!(["emerging", "needs_attention"]));
    assert_eq!(
        json["watchlistReasons"],
        serde_json::json!(["lessThanOnePhotoPerTour", "oftenRequestsClientInfo"])
    );
}
