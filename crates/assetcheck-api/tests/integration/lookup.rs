//! Dashboard and owner lookup.

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_dashboard_empty() {
    let app = TestApp::new().await;
    let response = app.get("/dashboard").await;
    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("<dd id=\"total\">0</dd>"));
    assert!(html.contains("<dd id=\"compliance\">0.0%</dd>"));
}

#[tokio::test]
async fn test_dashboard_after_scenario() {
    let app = TestApp::new().await;
    app.post_form(
        "/detail/PC-002",
        "item1=1&item2=0&item3=1&item4=1&item5=1&comment=dust+on+vents",
    )
    .await;

    let html = app.get("/dashboard").await.text();
    assert!(html.contains("<dd id=\"total\">1</dd>"));
    assert!(html.contains("<dd id=\"compliance\">80.0%</dd>"));
    assert!(html.contains("<dd id=\"weak-count\">1</dd>"));
}

#[tokio::test]
async fn test_owner_lookup_found() {
    let app = TestApp::new().await;
    let response = app.get("/api/owner?name=Minsu%20Lee").await;
    assert_eq!(response.status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(json["asset_no"], "PC-002");
    assert_eq!(json["department"], "Development");
    assert_eq!(json["sticker_no"], "ST-1002");
}

#[tokio::test]
async fn test_owner_lookup_missing_is_empty_object() {
    let app = TestApp::new().await;
    for uri in ["/api/owner?name=Nobody", "/api/owner?name=", "/api/owner"] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::OK, "{uri}");
        assert_eq!(response.text(), "{}", "{uri}");
    }
}
