//! Smoke tests for the pages and operational endpoints outside the directory.

mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn home_renders_without_flashes() {
    let mut app = TestApp::spawn().await;

    let home = app.get("/").await;
    assert_eq!(home.status, StatusCode::OK);
    assert_eq!(home.json["view"], "pages/home");
    assert_eq!(home.json["flashes"], serde_json::json!([]));
}

#[tokio::test]
async fn unknown_path_renders_404_view() {
    let mut app = TestApp::spawn().await;

    let response = app.get("/nowhere/at/all").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json["view"], "errors/404");
}

#[tokio::test]
async fn health_reports_database() {
    let mut app = TestApp::spawn().await;

    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["data"]["status"], "ok");
    assert_eq!(response.json["data"]["database"], true);
}

#[tokio::test]
async fn metrics_disabled_without_recorder() {
    let mut app = TestApp::spawn().await;

    let response = app.get("/metrics").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_forms_are_blank() {
    let mut app = TestApp::spawn().await;

    let venue = app.get("/venues/create").await;
    assert_eq!(venue.json["view"], "forms/new_venue");
    assert_eq!(venue.json["data"]["form"]["name"], "");
    assert_eq!(venue.json["data"]["form"]["seeking_talent"], false);

    let artist = app.get("/artists/create").await;
    assert_eq!(artist.json["view"], "forms/new_artist");
    assert_eq!(artist.json["data"]["form"]["genres"], serde_json::json!([]));
}
