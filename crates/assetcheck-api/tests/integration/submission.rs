//! Inspection submission over urlencoded and multipart bodies.

use assetcheck_core::AssetNo;
use assetcheck_storage::photo_file_name;
use axum::http::{header, StatusCode};

use crate::common::{multipart_body, TestApp, TEST_UPLOAD_LIMIT};

#[tokio::test]
async fn test_urlencoded_submit_redirects_and_persists() {
    let app = TestApp::new().await;
    let response = app
        .post_form(
            "/detail/PC-002",
            "item1=1&item2=0&item3=1&item4=1&item5=1&comment=dust+on+vents&inspector=Jane",
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.header(header::LOCATION), Some("/detail/PC-002"));

    let stored = app
        .store
        .inspection(&AssetNo::new("PC-002"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.items.flags(), [1, 0, 1, 1, 1]);
    assert_eq!(stored.comment, "dust on vents");
    assert_eq!(stored.inspector.as_deref(), Some("Jane"));
    assert_eq!(stored.sticker_no, "ST-1002");
}

#[tokio::test]
async fn test_missing_items_default_to_pass() {
    let app = TestApp::new().await;
    let response = app.post_form("/detail/PC-001", "item3=fail").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let stored = app
        .store
        .inspection(&AssetNo::new("PC-001"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.items.flags(), [1, 1, 0, 1, 1]);
    assert_eq!(stored.comment, "");
}

#[tokio::test]
async fn test_submit_unknown_asset_is_404_and_writes_nothing() {
    let app = TestApp::new().await;
    let response = app.post_form("/detail/PC-999", "item1=1").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(app
        .store
        .inspection(&AssetNo::new("PC-999"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_bad_item_value_is_400() {
    let app = TestApp::new().await;
    let response = app.post_form("/detail/PC-001", "item1=maybe").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body = multipart_body(&[("item2", "perhaps")], None);
    let response = app.post_multipart("/detail/PC-001", body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    assert!(app
        .store
        .inspection(&AssetNo::new("PC-001"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_bad_date_is_400() {
    let app = TestApp::new().await;
    let response = app
        .post_form("/detail/PC-001", "inspect_date=18%2F10%2F2026")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_multipart_with_photo_then_without_keeps_photo() {
    let app = TestApp::new().await;
    let body = multipart_body(
        &[("item1", "0"), ("comment", "cracked case"), ("inspect_date", "2026-10-01")],
        Some(("front.png", &b"\x89PNG fake"[..])),
    );
    let response = app.post_multipart("/detail/PC-004", body).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let first = app
        .store
        .inspection(&AssetNo::new("PC-004"))
        .await
        .unwrap()
        .unwrap();
    let photo = first.photo_path.clone().unwrap();
    assert!(photo.ends_with("_front.png"));
    assert_eq!(first.inspect_date.to_string(), "2026-10-01");

    // Resubmit with an empty file part: photo kept, everything else replaced
    let body = multipart_body(&[("comment", "fixed")], Some(("", &b""[..])));
    let response = app.post_multipart("/detail/PC-004", body).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let second = app
        .store
        .inspection(&AssetNo::new("PC-004"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.photo_path.as_deref(), Some(photo.as_str()));
    assert_eq!(second.items.flags(), [1, 1, 1, 1, 1]);
    assert_eq!(second.comment, "fixed");

    // The stored photo is served back
    let file = photo_file_name(&photo).unwrap();
    let response = app.get(&format!("/photos/{file}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header(header::CONTENT_TYPE), Some("image/png"));
    assert_eq!(response.body, b"\x89PNG fake");

    // And linked from the detail page
    let html = app.get("/detail/PC-004").await.text();
    assert!(html.contains(&format!("href=\"/photos/{file}\"")));
}

#[tokio::test]
async fn test_oversized_upload_rejected() {
    let app = TestApp::new().await;
    let big = vec![0u8; TEST_UPLOAD_LIMIT + 1];
    let body = multipart_body(&[("comment", "big")], Some(("big.jpg", big.as_slice())));
    let response = app.post_multipart("/detail/PC-001", body).await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(app
        .store
        .inspection(&AssetNo::new("PC-001"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_photo_path_traversal_is_404() {
    let app = TestApp::new().await;
    std::fs::write(app.dir.path().join("secret.txt"), b"nope").unwrap();

    for uri in ["/photos/..%2Fsecret.txt", "/photos/.hidden", "/photos/missing.png"] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{uri}");
    }
}
