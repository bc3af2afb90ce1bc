//! Spreadsheet download.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use chrono::Local;

use crate::state::AppState;
use crate::views::path_segment;
use crate::Result;

/// MIME type of `.xlsx` workbooks.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// `GET /export`
///
/// Writes the report into the results directory and returns the same
/// workbook as an attachment, served from the bytes that were written.
pub async fn export(State(state): State<AppState>) -> Result<Response> {
    let rows = state.store.report_rows().await?;
    let reports = state.reports.clone();
    let today = Local::now().date_naive();

    let report = tokio::task::spawn_blocking(move || reports.write(&rows, today)).await??;

    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static(XLSX_CONTENT_TYPE)),
            (CONTENT_DISPOSITION, attachment(&report.file_name)),
        ],
        report.bytes,
    )
        .into_response())
}

/// `Content-Disposition` for `file_name`, with an ASCII fallback and the
/// UTF-8 name in `filename*`.
pub fn attachment(file_name: &str) -> HeaderValue {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let value = format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        path_segment(file_name)
    );
    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}
