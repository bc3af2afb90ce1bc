//! Export file naming.

use assetcheck_core::util::sanitize_component;
use assetcheck_core::{first_inspector, ReportRow};
use chrono::NaiveDate;

/// Inspector segment used when no row names an inspector.
pub const UNKNOWN_INSPECTOR: &str = "unknown";

/// Name of the export file for `rows` written on `date`.
///
/// The inspector segment is the first non-empty inspector in row order,
/// sanitized into a single path component.
///
/// # Examples
///
/// ```
/// use assetcheck_report::file_name;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// assert_eq!(file_name(&[], date), "inspection_result_20261018_unknown.xlsx");
/// ```
pub fn file_name(rows: &[ReportRow], date: NaiveDate) -> String {
    let inspector = first_inspector(rows)
        .and_then(sanitize_component)
        .unwrap_or_else(|| UNKNOWN_INSPECTOR.to_string());
    format!("inspection_result_{}_{inspector}.xlsx", date.format("%Y%m%d"))
}
