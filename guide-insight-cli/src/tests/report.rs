//! Shape of the JSON report produced by the analyze command.

use super::analyze::{AnalyzeConfig, execute_analyze};
use super::helpers::ExportWorkspace;
use super::*;
use guide_insight_core::RankingMode;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

struct Report {
    _workspace: ExportWorkspace,
    json: Value,
}

fn report_with(customise: impl FnOnce(&mut AnalyzeArgs)) -> Report {
    let workspace = ExportWorkspace::new();
    let mut args = AnalyzeArgs {
        input: Some(workspace.write_sample_export()),
        ..AnalyzeArgs::default()
    };
    customise(&mut args);
    let config = AnalyzeConfig::try_from(args).expect("config");

    let mut buffer = Vec::new();
    execute_analyze(&config, &mut buffer).expect("analysis succeeds");
    let json = serde_json::from_slice(&buffer).expect("report is JSON");
    Report {
        _workspace: workspace,
        json,
    }
}

#[fixture]
fn default_report() -> Report {
    report_with(|_| {})
}

fn ids(rows: &Value) -> Vec<i64> {
    rows.as_array()
        .expect("array of rows")
        .iter()
        .map(|row| row["id"].as_i64().expect("numeric id"))
        .collect()
}

#[rstest]
fn report_carries_population_and_totals(default_report: Report) {
    let report = &default_report.json;
    assert_eq!(report["guideCount"], 6);
    assert_eq!(
        report["kpiTotals"],
        json!({
            "toursDone": 36,
            "photosTakenAmount": 82,
            "photosTakenFrequency": 28,
            "requestedClientInfo": 20,
        })
    );
    assert_eq!(report["population"]["toursDonePercentileCut"], 4);
    assert_eq!(report["thresholds"]["minClientInfoRequests"], 3);
}

#[rstest]
fn report_lists_primary_status_counts(default_report: Report) {
    assert_eq!(
        default_report.json["statusDistribution"],
        json!([
            {"status": "inactive", "label": "Inactive", "count": 1},
            {"status": "new", "label": "New", "count": 1},
            {"status": "emerging", "label": "Emerging", "count": 1},
            {"status": "consistent", "label": "Consistent", "count": 3},
        ])
    );
}

#[rstest]
fn leaderboard_ranks_by_engagement_by_default(default_report: Report) {
    let leaderboard = &default_report.json["leaderboard"];
    assert_eq!(ids(leaderboard), [5, 4, 2, 6, 1, 3]);
    assert_eq!(leaderboard[0]["rank"], 1);
    assert_eq!(leaderboard[0]["name"], "Elena");
    assert_eq!(leaderboard[5]["rank"], 6);
}

#[rstest]
fn leaderboard_honours_mode_and_size() {
    let report = report_with(|args| {
        args.ranking = Some(RankingMode::RequestsPerTour);
        args.leaderboard_size = Some(2);
    });
    assert_eq!(report.json["ranking"], "requestsPerTour");
    assert_eq!(ids(&report.json["leaderboard"]), [3, 6]);
    assert_eq!(report.json["leaderboard"][0]["value"], 1.25);
}

#[rstest]
fn watchlist_rows_explain_their_reasons(default_report: Report) {
    let watchlist = &default_report.json["watchlist"];
    assert_eq!(ids(watchlist), [3, 6]);
    assert_eq!(
        watchlist[0]["reasons"],
        json!([
            {"code": "lessThanOnePhotoPerTour", "label": "Takes less than one photo per tour"},
            {"code": "oftenRequestsClientInfo", "label": "Often requests client information"},
        ])
    );
}

#[rstest]
fn guide_listing_follows_the_display_filter() {
    let report = report_with(|args| {
        args.favourites_only = Some(true);
        args.sort = Some(guide_insight_analyzer::SortField::ToursDone);
    });
    assert_eq!(ids(&report.json["guides"]), [4, 2]);
    assert_eq!(ids(&report.json["leaderboard"]).len(), 6);
}
