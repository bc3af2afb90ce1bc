//! Error types for assetcheck-report

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for assetcheck-report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in assetcheck-report
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Workbook could not be built or saved
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Results directory could not be prepared
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Directory or file involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}
