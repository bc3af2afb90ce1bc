//! Spreadsheet export end to end.

use std::io::Cursor;

use axum::http::{header, StatusCode};
use calamine::{Data, Reader, Xlsx};
use chrono::Local;

use crate::common::TestApp;

fn read_sheet(bytes: Vec<u8>) -> calamine::Range<Data> {
    let mut workbook = Xlsx::new(Cursor::new(bytes)).unwrap();
    workbook.worksheet_range("inspections").unwrap()
}

fn text(range: &calamine::Range<Data>, row: u32, col: u32) -> Option<String> {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => Some(s.clone()),
        _ => None,
    }
}

fn is_blank(range: &calamine::Range<Data>, row: u32, col: u32) -> bool {
    matches!(range.get_value((row, col)), None | Some(Data::Empty))
}

#[tokio::test]
async fn test_export_scenario() {
    let app = TestApp::new().await;
    let response = app
        .post_form(
            "/detail/PC-002",
            "item1=1&item2=0&item3=1&item4=1&item5=1&comment=dust+on+vents&inspector=Jane",
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let response = app.get("/export").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
    );

    let expected_name = format!(
        "inspection_result_{}_Jane.xlsx",
        Local::now().date_naive().format("%Y%m%d")
    );
    let disposition = response.header(header::CONTENT_DISPOSITION).unwrap();
    assert!(disposition.starts_with("attachment;"));
    assert!(disposition.contains(&expected_name));

    // The same file is kept in the results directory
    let saved = app.dir.path().join("results").join(&expected_name);
    assert_eq!(std::fs::read(&saved).unwrap(), response.body);

    let range = read_sheet(response.body);
    assert_eq!(range.height(), 5);
    assert_eq!(text(&range, 0, 0).as_deref(), Some("asset_no"));

    let assets: Vec<String> = (1..5).filter_map(|r| text(&range, r, 0)).collect();
    assert_eq!(assets, vec!["PC-001", "PC-002", "PC-003", "PC-004"]);

    // PC-002 row: item2 = 0, the rest 1
    let flags: Vec<f64> = (5..10)
        .filter_map(|c| match range.get_value((2, c)) {
            Some(Data::Float(f)) => Some(*f),
            _ => None,
        })
        .collect();
    assert_eq!(flags, vec![1.0, 0.0, 1.0, 1.0, 1.0]);
    assert_eq!(text(&range, 2, 10).as_deref(), Some("dust on vents"));
    assert_eq!(text(&range, 2, 14).as_deref(), Some("submitted"));

    // Uninspected rows carry empty inspection columns
    for row in [1, 3, 4] {
        for col in 4..16 {
            assert!(is_blank(&range, row, col), "row {row} col {col}");
        }
    }
}

#[tokio::test]
async fn test_export_without_inspections() {
    let app = TestApp::new().await;
    let response = app.get("/export").await;
    assert_eq!(response.status, StatusCode::OK);

    let disposition = response.header(header::CONTENT_DISPOSITION).unwrap();
    assert!(disposition.contains("_unknown.xlsx"));

    let range = read_sheet(response.body);
    assert_eq!(range.height(), 5);
    assert!(is_blank(&range, 1, 4));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_exports_return_whole_workbooks() {
    let app = TestApp::new().await;
    app.post_form("/detail/PC-001", "item1=0&comment=loose+cable&inspector=Jane")
        .await;

    let (a, b, c, d) = tokio::join!(
        app.get("/export"),
        app.get("/export"),
        app.get("/export"),
        app.get("/export")
    );
    for response in [a, b, c, d] {
        assert_eq!(response.status, StatusCode::OK);
        let range = read_sheet(response.body);
        assert_eq!(range.height(), 5);
        assert_eq!(text(&range, 1, 10).as_deref(), Some("loose cable"));
    }

    let results: Vec<_> = std::fs::read_dir(app.dir.path().join("results"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(results.len(), 1, "stray files: {results:?}");
    assert!(results[0].ends_with("_Jane.xlsx"));
}
