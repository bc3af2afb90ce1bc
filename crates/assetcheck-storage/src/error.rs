//! Error types for assetcheck-storage.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for assetcheck-storage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in assetcheck-storage.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from assetcheck-core (validation, unknown asset)
    #[error(transparent)]
    Core(#[from] assetcheck_core::Error),

    /// Database error, including constraint violations
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem error with the path involved
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Roster file could not be read or parsed
    #[error("Roster error: {0}")]
    Roster(#[from] csv::Error),

    /// A stored row does not decode into domain types
    #[error("Corrupt row for asset {asset_no}: {message}")]
    CorruptRow {
        /// Asset the row belongs to
        asset_no: String,
        /// What failed to decode
        message: String,
    },
}

impl Error {
    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a corrupt-row error.
    pub fn corrupt(asset_no: impl Into<String>, message: impl Into<String>) -> Self {
        Error::CorruptRow {
            asset_no: asset_no.into(),
            message: message.into(),
        }
    }

    /// Whether the error means the asset is unknown.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Core(e) if e.is_not_found())
    }

    /// Whether the error is a rejected form value.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Core(e) if e.is_validation())
    }
}
