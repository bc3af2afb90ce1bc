//! Common test harness for assetcheck-api integration tests.

use assetcheck_api::{build_router, AppState};
use assetcheck_report::ReportBuilder;
use assetcheck_storage::{RosterSource, Store, StoreConfig};
use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

/// Boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "assetcheck-test-boundary";

/// Upload limit used by the harness router.
pub const TEST_UPLOAD_LIMIT: usize = 64 * 1024;

/// A router over a fresh, demo-seeded database in a temp directory.
pub struct TestApp {
    /// Keeps the directory alive for the test's duration
    pub dir: TempDir,
    /// The shared store, for asserting on persisted state
    pub store: Store,
    router: Router,
}

/// A buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::new(dir.path().join("test.db"), dir.path().join("uploads"));
        let store = Store::open(&config).await.unwrap();
        store.init(&RosterSource::Demo).await.unwrap();

        let reports = ReportBuilder::new(dir.path().join("results"));
        let router = build_router(AppState::new(store.clone(), reports), TEST_UPLOAD_LIMIT);
        Self { dir, store, router }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            body: body.to_vec(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_multipart(&self, uri: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }
}

/// Builds a multipart body from text fields and an optional
/// `(file_name, bytes)` photo part.
pub fn multipart_body(fields: &[(&str, &str)], photo: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = photo {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"photo\"; \
                 filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
