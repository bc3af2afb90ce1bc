//! Error types for assetcheck-core.

/// Errors raised while building or validating domain values.
///
/// Marked `#[non_exhaustive]` so new variants can be added without
/// breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A submitted value could not be coerced into its domain type.
    #[error("Validation error: {message}")]
    Validation {
        /// Form field that failed, when known
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// The referenced asset does not exist in the registry.
    #[error("Asset not found: {asset_no}")]
    AssetNotFound {
        /// Asset number that was looked up
        asset_no: String,
    },
}

/// Convenience `Result` alias for assetcheck-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a validation error without a field name.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a validation error tied to a form field.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates an asset-not-found error.
    pub fn asset_not_found<S: Into<String>>(asset_no: S) -> Self {
        Error::AssetNotFound {
            asset_no: asset_no.into(),
        }
    }

    /// Whether the caller sent something we cannot accept (vs. a lookup miss).
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Whether this error means the asset is unknown.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::AssetNotFound { .. })
    }
}
