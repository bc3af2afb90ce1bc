//! Registry types: asset numbers and roster entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::inspection::InspectionStatus;

/// Unique, immutable identifier of a tracked asset (e.g. `PC-001`).
///
/// Ordering is plain string ordering, which is the order listings and
/// reports use.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetNo(String);

impl AssetNo {
    /// Creates an asset number from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetcheck_core::AssetNo;
    ///
    /// let no = AssetNo::new("PC-001");
    /// assert_eq!(no.as_str(), "PC-001");
    /// ```
    pub fn new<S: Into<String>>(asset_no: S) -> Self {
        Self(asset_no.into())
    }

    /// Returns the asset number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AssetNo {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AssetNo {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for AssetNo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One entry of the asset roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique asset number
    pub asset_no: AssetNo,
    /// Name of the person holding the asset
    pub name: String,
    /// Owner's department
    pub department: String,
    /// Sticker number issued with the asset
    pub sticker_no: String,
}

impl Asset {
    /// Creates a roster entry.
    pub fn new(
        asset_no: impl Into<AssetNo>,
        name: impl Into<String>,
        department: impl Into<String>,
        sticker_no: impl Into<String>,
    ) -> Self {
        Self {
            asset_no: asset_no.into(),
            name: name.into(),
            department: department.into(),
            sticker_no: sticker_no.into(),
        }
    }
}

/// An asset joined with the status of its latest inspection, as shown in
/// the roster listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetListing {
    /// The roster entry
    pub asset: Asset,
    /// Status of the stored inspection, `None` if never inspected
    pub status: Option<InspectionStatus>,
}

impl AssetListing {
    /// Whether an inspection has been submitted for this asset.
    pub fn is_submitted(&self) -> bool {
        matches!(self.status, Some(InspectionStatus::Submitted))
    }
}

/// Roster shipped with a fresh database when no roster file is configured.
pub fn demo_roster() -> Vec<Asset> {
    vec![
        Asset::new("PC-001", "Seohyun Kim", "Information Security", "ST-1001"),
        Asset::new("PC-002", "Minsu Lee", "Development", "ST-1002"),
        Asset::new("PC-003", "Jieun Park", "Planning", "ST-1003"),
        Asset::new("PC-004", "Dohyun Choi", "Development", "ST-1004"),
    ]
}
