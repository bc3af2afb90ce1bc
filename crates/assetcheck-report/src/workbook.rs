//! Workbook writer for the inspection report.

use std::path::{Path, PathBuf};

use assetcheck_core::ReportRow;
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::{debug, info};
use uuid::Uuid;

use crate::columns::{cells, Cell, COLUMNS};
use crate::naming::file_name;
use crate::{Error, Result};

/// Name of the single worksheet in every export.
pub const SHEET_NAME: &str = "inspections";

/// A report written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    /// Full path of the written file
    pub path: PathBuf,
    /// File name offered to the client
    pub file_name: String,
    /// Workbook contents, identical to what was written to `path`
    pub bytes: Vec<u8>,
}

/// Writes report rows as `.xlsx` files under a results directory.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    results_dir: PathBuf,
}

impl ReportBuilder {
    /// Creates a builder writing into `results_dir`.
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    /// Results directory.
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Writes `rows` as one worksheet, header first, in the given row order.
    ///
    /// The workbook is built in memory and the returned bytes are what the
    /// caller should serve. The file is written under a unique temporary
    /// name and renamed into place, so an existing file of the same name is
    /// replaced whole and concurrent exports never observe a partial file.
    /// This does blocking file I/O; async callers should run it on a
    /// blocking thread.
    pub fn write(&self, rows: &[ReportRow], date: NaiveDate) -> Result<ExportedReport> {
        std::fs::create_dir_all(&self.results_dir).map_err(|source| Error::Io {
            path: self.results_dir.clone(),
            source,
        })?;

        let file_name = file_name(rows, date);
        let path = self.results_dir.join(&file_name);

        let mut workbook = build_workbook(rows)?;
        let bytes = workbook.save_to_buffer()?;

        let staging = self
            .results_dir
            .join(format!(".{}.{file_name}.tmp", Uuid::new_v4().simple()));
        std::fs::write(&staging, &bytes).map_err(|source| Error::Io {
            path: staging.clone(),
            source,
        })?;
        if let Err(source) = std::fs::rename(&staging, &path) {
            let _ = std::fs::remove_file(&staging);
            return Err(Error::Io { path, source });
        }

        info!(path = %path.display(), rows = rows.len(), bytes = bytes.len(), "Report exported");
        Ok(ExportedReport {
            path,
            file_name,
            bytes,
        })
    }
}

fn build_workbook(rows: &[ReportRow]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, title) in (0u16..).zip(COLUMNS) {
        sheet.write_string_with_format(0, col, title, &header)?;
    }

    for (row_idx, row) in (1u32..).zip(rows) {
        write_row(sheet, row_idx, row)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    debug!(rows = rows.len(), "Built report workbook");
    Ok(workbook)
}

fn write_row(sheet: &mut Worksheet, row_idx: u32, row: &ReportRow) -> Result<()> {
    for (col, cell) in (0u16..).zip(cells(row)) {
        match cell {
            Cell::Text(text) => {
                sheet.write_string(row_idx, col, text.as_ref())?;
            }
            Cell::Number(n) => {
                sheet.write_number(row_idx, col, n)?;
            }
            Cell::Empty => {}
        }
    }
    Ok(())
}
