//! Error types for assetcheck-api and their HTTP mapping.

use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error};

use crate::views;

/// Result type alias for assetcheck-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in assetcheck-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from assetcheck-core
    #[error(transparent)]
    Core(#[from] assetcheck_core::Error),

    /// Error from assetcheck-storage
    #[error(transparent)]
    Storage(#[from] assetcheck_storage::Error),

    /// Error from assetcheck-report
    #[error("Report error: {0}")]
    Report(#[from] assetcheck_report::Error),

    /// Request body could not be read or decoded
    #[error("{message}")]
    Rejected {
        /// Status to answer with
        status: StatusCode,
        /// Client-facing description
        message: String,
    },

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O failure outside the store
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A blocking task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Creates an I/O error for `path`.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a body rejection. Decoding failures answer 400 rather than
    /// axum's default 422.
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        let status = if status == StatusCode::UNPROCESSABLE_ENTITY {
            StatusCode::BAD_REQUEST
        } else {
            status
        };
        Error::Rejected {
            status,
            message: message.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Core(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Error::Core(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            Error::Storage(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Error::Storage(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            Error::Rejected { status, .. } => *status,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            debug!(error = %self, status = status.as_u16(), "Request rejected");
            self.to_string()
        };
        (status, Html(views::error_page(status, &message))).into_response()
    }
}
