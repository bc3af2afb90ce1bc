//! Spreadsheet export for assetcheck.
//!
//! Turns the joined roster/inspection rows produced by the storage layer
//! into a single-sheet `.xlsx` workbook:
//!
//! - [`columns`]: fixed column order and per-row cell projection
//! - [`naming`]: `inspection_result_{YYYYMMDD}_{inspector}.xlsx`
//! - [`workbook`]: [`ReportBuilder`], which writes the file
//!
//! # Example
//!
//! ```no_run
//! use assetcheck_report::ReportBuilder;
//! use chrono::Local;
//!
//! # fn example(rows: Vec<assetcheck_core::ReportRow>) -> assetcheck_report::Result<()> {
//! let builder = ReportBuilder::new("results");
//! let report = builder.write(&rows, Local::now().date_naive())?;
//! println!("wrote {}", report.path.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod columns;
pub mod error;
pub mod naming;
pub mod workbook;

pub use columns::{Cell, COLUMNS};
pub use error::{Error, Result};
pub use naming::{file_name, UNKNOWN_INSPECTOR};
pub use workbook::{ExportedReport, ReportBuilder, SHEET_NAME};
