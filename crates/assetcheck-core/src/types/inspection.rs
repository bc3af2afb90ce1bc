//! Inspection outcome types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::asset::AssetNo;
use crate::{Error, Result};

/// Number of fixed check items on every inspection.
pub const ITEM_COUNT: usize = 5;

// ============================================================================
// ItemResult
// ============================================================================

/// Outcome of a single check item.
///
/// Persisted and exported as an integer flag: pass = 1, fail = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemResult {
    /// The item passed. Also the value used when a form omits the item.
    #[default]
    Pass,
    /// The item failed.
    Fail,
}

impl ItemResult {
    /// Integer flag as stored in the database.
    pub fn as_flag(self) -> i64 {
        match self {
            ItemResult::Pass => 1,
            ItemResult::Fail => 0,
        }
    }

    /// Converts a stored flag back into a result.
    pub fn from_flag(flag: i64) -> Result<Self> {
        match flag {
            1 => Ok(ItemResult::Pass),
            0 => Ok(ItemResult::Fail),
            other => Err(Error::validation(format!(
                "item flag must be 0 or 1, got {other}"
            ))),
        }
    }

    /// Coerces a form value into a result.
    ///
    /// Accepts `1/0`, `pass/fail`, `true/false`, `on/off`, `yes/no`
    /// (case-insensitive, surrounding whitespace ignored).
    ///
    /// # Examples
    ///
    /// ```
    /// use assetcheck_core::ItemResult;
    ///
    /// assert_eq!(ItemResult::parse("1").unwrap(), ItemResult::Pass);
    /// assert_eq!(ItemResult::parse(" Fail ").unwrap(), ItemResult::Fail);
    /// assert!(ItemResult::parse("maybe").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "pass" | "true" | "on" | "yes" => Ok(ItemResult::Pass),
            "0" | "fail" | "false" | "off" | "no" => Ok(ItemResult::Fail),
            other => Err(Error::validation(format!(
                "expected pass/fail or 1/0, got '{other}'"
            ))),
        }
    }

    /// Returns `true` for [`ItemResult::Pass`].
    pub fn is_pass(self) -> bool {
        matches!(self, ItemResult::Pass)
    }
}

impl fmt::Display for ItemResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemResult::Pass => write!(f, "pass"),
            ItemResult::Fail => write!(f, "fail"),
        }
    }
}

impl Serialize for ItemResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_flag())
    }
}

impl<'de> Deserialize<'de> for ItemResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Bool(bool),
            Text(String),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Int(flag) => ItemResult::from_flag(flag),
            Raw::Bool(true) => Ok(ItemResult::Pass),
            Raw::Bool(false) => Ok(ItemResult::Fail),
            Raw::Text(text) => ItemResult::parse(&text),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// ItemResults
// ============================================================================

/// The five item outcomes of one inspection, in item order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ItemResults([ItemResult; ITEM_COUNT]);

impl ItemResults {
    /// Wraps five results.
    pub fn new(items: [ItemResult; ITEM_COUNT]) -> Self {
        Self(items)
    }

    /// Builds results from stored integer flags.
    pub fn from_flags(flags: [i64; ITEM_COUNT]) -> Result<Self> {
        let mut items = [ItemResult::Pass; ITEM_COUNT];
        for (slot, flag) in items.iter_mut().zip(flags) {
            *slot = ItemResult::from_flag(flag)?;
        }
        Ok(Self(items))
    }

    /// Integer flags in item order.
    pub fn flags(&self) -> [i64; ITEM_COUNT] {
        self.0.map(ItemResult::as_flag)
    }

    /// Result of item `n` (1-based, matching the `item1..item5` field names).
    pub fn item(&self, n: usize) -> Option<ItemResult> {
        n.checked_sub(1).and_then(|i| self.0.get(i).copied())
    }

    /// Iterates over the results in item order.
    pub fn iter(&self) -> impl Iterator<Item = ItemResult> + '_ {
        self.0.iter().copied()
    }

    /// Number of passed items.
    pub fn passed(&self) -> usize {
        self.iter().filter(|r| r.is_pass()).count()
    }

    /// Number of failed items.
    pub fn failed(&self) -> usize {
        ITEM_COUNT - self.passed()
    }
}

// ============================================================================
// InspectionStatus
// ============================================================================

/// Workflow status of a stored inspection.
///
/// There is a single state: an asset without a row has no status, and every
/// successful submission leaves the row `Submitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionStatus {
    /// The inspection form was submitted.
    Submitted,
}

impl InspectionStatus {
    /// Value stored in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            InspectionStatus::Submitted => "submitted",
        }
    }

    /// Parses a stored status; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "submitted" => Some(InspectionStatus::Submitted),
            _ => None,
        }
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Inspection / Submission
// ============================================================================

/// The latest recorded inspection of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    /// Inspected asset
    pub asset_no: AssetNo,
    /// Sticker number observed on the asset
    pub sticker_no: String,
    /// Item outcomes
    pub items: ItemResults,
    /// Free-text comment
    pub comment: String,
    /// Stored photo path, if a photo was ever attached
    pub photo_path: Option<String>,
    /// Date the inspection took place
    pub inspect_date: NaiveDate,
    /// Name of the inspector
    pub inspector: Option<String>,
    /// Workflow status
    pub status: InspectionStatus,
    /// When this row was (re)written
    pub created_at: DateTime<Utc>,
}

/// Fully resolved values written by one submission.
///
/// Produced from an [`InspectionForm`](crate::InspectionForm); every field
/// has its final value so the store never merges with the previous row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Sticker number observed on the asset
    pub sticker_no: String,
    /// Item outcomes
    pub items: ItemResults,
    /// Free-text comment
    pub comment: String,
    /// Date the inspection took place
    pub inspect_date: NaiveDate,
    /// Name of the inspector
    pub inspector: Option<String>,
}
