// tests/api_routes.rs
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use habikino_rating::api::create_router;
use habikino_rating::api::handlers::AppState;
use habikino_rating::config::settings::AppConfig;
use habikino_rating::history::RatingHistory;
use habikino_rating::services::roster::RosterService;

const SHEET: &str = "会員番号\n氏名\nR\n1802222\n佐藤\n1500\n1900131\n伊藤\n1400\n";

const CSV: &str = ",会員番号,日付,場所,レイティング\n\
    0,1802222,2018-03-01,羽曳野,1500\n\
    1,1802222,2018-09-01,羽曳野,1503\n\
    2,1802222,2019-02-01,堺,1440\n\
    3,1900131,2019-05-01,羽曳野,1400\n";

fn app(with_history: bool) -> Router {
    let config = AppConfig::new();
    let history = with_history.then(|| RatingHistory::from_reader(CSV.as_bytes()).unwrap());
    let state = AppState {
        roster: RosterService::new(config.parser.clone()).unwrap(),
        config,
        history,
    };
    create_router(Arc::new(state))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn parse_returns_roster_and_skips() {
    let text = format!("{}noise\n", SHEET);
    let (status, body) = send(app(false), post_json("/api/roster/parse", json!({ "text": text }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"].as_array().unwrap().len(), 2);
    assert_eq!(body["entries"][0]["memberId"], 1802222);
    assert_eq!(body["entries"][0]["name"], "佐藤");
    assert_eq!(body["entries"][1]["rating"], "1400");
    assert_eq!(body["skipped"][0]["reason"]["kind"], "notAnId");
}

#[tokio::test]
async fn names_use_loose_scan() {
    let request = post_json("/api/roster/names", json!({ "text": "1 1802222 佐藤\n1900131\n伊藤" }));
    let (status, body) = send(app(false), request).await;

    assert_eq!(status, StatusCode::OK);
    let names = body["names"].as_array().unwrap();
    assert_eq!(names.len(), 2);
    assert_eq!(names[0]["memberId"], 1802222);
    assert_eq!(names[1]["name"], "伊藤");
}

#[tokio::test]
async fn adjustments_apply_outcomes_for_reference() {
    let request = post_json(
        "/api/adjustments",
        json!({
            "text": SHEET,
            "reference": 1802222,
            "outcomes": [{ "memberId": 1900131, "won": true }]
        }),
    );
    let (status, body) = send(app(false), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(body["projectedRating"], 1504);
    assert_eq!(body["rows"][0]["outcome"], "—");
    assert_eq!(body["rows"][1]["difference"], 100);
    assert_eq!(body["rows"][1]["outcome"], "win");
}

#[tokio::test]
async fn unknown_reference_is_not_found() {
    let request = post_json("/api/adjustments", json!({ "text": SHEET, "reference": 1234567 }));
    let (status, body) = send(app(false), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("1234567"));
}

#[tokio::test]
async fn unrated_reference_is_unprocessable() {
    let text = "1802222\n佐藤\n初\n";
    let request = post_json("/api/adjustments", json!({ "text": text, "reference": 1802222 }));
    let (status, _) = send(app(false), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn yearly_averages_by_member() {
    let uri = "/api/history/yearly?members=1802222,1900131&from=2018&to=2019";
    let (status, body) = send(app(true), get(uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["years"][0]["average"], 1501);
    assert_eq!(body[0]["years"][1]["average"], 1440);
    assert_eq!(body[1]["years"][0]["average"], 0);
}

#[tokio::test]
async fn invalid_member_list_is_bad_request() {
    let (status, _) = send(app(true), get("/api/history/yearly?members=abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn out_of_range_member_is_bad_request() {
    let (status, body) = send(app(true), get("/api/history/series?members=1802222,42")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("42"));
}

#[tokio::test]
async fn member_detail_and_missing_member() {
    let (status, body) = send(app(true), get("/api/history/member/1802222")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["records"].as_array().unwrap().len(), 3);
    assert_eq!(body["summary"]["biggestSwing"]["change"], -63);

    let (status, _) = send(app(true), get("/api/history/member/1800280")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn series_points_per_member() {
    let (status, body) = send(app(true), get("/api/history/series?members=1900131")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["label"], "1900131");
    assert_eq!(body[0]["points"][0]["date"], "2019-05-01");
}

#[tokio::test]
async fn history_without_csv_is_unavailable() {
    let (status, _) = send(app(false), get("/api/history/yearly")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
