//! Roster listing, search and detail pages.

use axum::http::StatusCode;

use crate::common::TestApp;

fn listed_assets(html: &str) -> Vec<String> {
    html.split("<a href=\"/detail/")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_index_lists_all_in_order() {
    let app = TestApp::new().await;
    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        listed_assets(&response.text()),
        vec!["PC-001", "PC-002", "PC-003", "PC-004"]
    );
}

#[tokio::test]
async fn test_index_blank_query_lists_all() {
    let app = TestApp::new().await;
    let response = app.get("/?q=").await;
    assert_eq!(listed_assets(&response.text()).len(), 4);
}

#[tokio::test]
async fn test_index_search_by_department() {
    let app = TestApp::new().await;
    let response = app.get("/?q=Development").await;
    assert_eq!(listed_assets(&response.text()), vec!["PC-002", "PC-004"]);
}

#[tokio::test]
async fn test_index_search_is_case_sensitive() {
    let app = TestApp::new().await;
    let response = app.get("/?q=development").await;
    assert!(listed_assets(&response.text()).is_empty());
    assert!(response.text().contains("No matching assets."));
}

#[tokio::test]
async fn test_index_shows_status_after_submit() {
    let app = TestApp::new().await;
    app.post_form("/detail/PC-003", "comment=ok").await;

    let html = app.get("/?q=PC-003").await.text();
    assert!(html.contains(">submitted<"));
    let html = app.get("/?q=PC-001").await.text();
    assert!(html.contains(">pending<"));
}

#[tokio::test]
async fn test_detail_unknown_asset_is_404() {
    let app = TestApp::new().await;
    let response = app.get("/detail/PC-999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.text().contains("Asset not found: PC-999"));
}

#[tokio::test]
async fn test_detail_shows_form() {
    let app = TestApp::new().await;
    let response = app.get("/detail/PC-001").await;
    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Seohyun Kim"));
    assert!(html.contains("action=\"/detail/PC-001\""));
    assert!(html.contains("enctype=\"multipart/form-data\""));
}

#[tokio::test]
async fn test_healthz() {
    let app = TestApp::new().await;
    let response = app.get("/healthz").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "ok");
}
