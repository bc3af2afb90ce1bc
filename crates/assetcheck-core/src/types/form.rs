//! Typed inspection form.
//!
//! Recognized fields are enumerated here with their defaults; anything else a
//! client posts is ignored. Items omitted from the form count as a pass.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::asset::Asset;
use super::inspection::{ItemResult, ItemResults, Submission, ITEM_COUNT};
use crate::{Error, Result};

/// Date format accepted for `inspect_date` (HTML `<input type="date">`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inspection form as posted to `/detail/{asset_no}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InspectionForm {
    /// Item 1 result
    #[serde(default, deserialize_with = "blank_item")]
    pub item1: Option<ItemResult>,
    /// Item 2 result
    #[serde(default, deserialize_with = "blank_item")]
    pub item2: Option<ItemResult>,
    /// Item 3 result
    #[serde(default, deserialize_with = "blank_item")]
    pub item3: Option<ItemResult>,
    /// Item 4 result
    #[serde(default, deserialize_with = "blank_item")]
    pub item4: Option<ItemResult>,
    /// Item 5 result
    #[serde(default, deserialize_with = "blank_item")]
    pub item5: Option<ItemResult>,
    /// Free-text comment
    #[serde(default)]
    pub comment: Option<String>,
    /// Sticker number observed on the asset
    #[serde(default)]
    pub sticker_no: Option<String>,
    /// Inspection date, `YYYY-MM-DD`
    #[serde(default)]
    pub inspect_date: Option<String>,
    /// Inspector name
    #[serde(default)]
    pub inspector: Option<String>,
}

fn blank_item<'de, D>(deserializer: D) -> std::result::Result<Option<ItemResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => ItemResult::parse(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl InspectionForm {
    /// Sets a field from a raw text value (used for multipart bodies).
    ///
    /// Unrecognized field names are ignored. Blank item values leave the
    /// item unset.
    pub fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        let item_slot = match name {
            "item1" => Some(&mut self.item1),
            "item2" => Some(&mut self.item2),
            "item3" => Some(&mut self.item3),
            "item4" => Some(&mut self.item4),
            "item5" => Some(&mut self.item5),
            _ => None,
        };
        if let Some(slot) = item_slot {
            *slot = match value.trim() {
                "" => None,
                v => Some(ItemResult::parse(v).map_err(|_| {
                    Error::validation_field(name, format!("expected pass/fail or 1/0, got '{v}'"))
                })?),
            };
            return Ok(());
        }

        match name {
            "comment" => self.comment = Some(value),
            "sticker_no" => self.sticker_no = Some(value),
            "inspect_date" => self.inspect_date = Some(value),
            "inspector" => self.inspector = Some(value),
            _ => {}
        }
        Ok(())
    }

    /// Item results with omitted items defaulted to pass.
    pub fn items(&self) -> ItemResults {
        let raw: [Option<ItemResult>; ITEM_COUNT] =
            [self.item1, self.item2, self.item3, self.item4, self.item5];
        ItemResults::new(raw.map(Option::unwrap_or_default))
    }

    /// Resolves the form against the asset it targets.
    ///
    /// - blank `sticker_no` falls back to the asset's default sticker
    /// - blank `inspect_date` falls back to `today`
    /// - blank `inspector` is stored as absent
    /// - missing `comment` becomes the empty string
    pub fn into_submission(self, asset: &Asset, today: NaiveDate) -> Result<Submission> {
        let items = self.items();

        let inspect_date = match non_blank(self.inspect_date.as_deref()) {
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
                Error::validation_field("inspect_date", format!("'{raw}' is not a date: {e}"))
            })?,
            None => today,
        };

        let sticker_no = non_blank(self.sticker_no.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| asset.sticker_no.clone());

        let inspector = non_blank(self.inspector.as_deref()).map(str::to_string);

        Ok(Submission {
            sticker_no,
            items,
            comment: self.comment.unwrap_or_default(),
            inspect_date,
            inspector,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Binary photo part of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    /// Client-supplied filename, if any
    pub file_name: Option<String>,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    /// Creates an upload.
    pub fn new(file_name: Option<String>, bytes: Vec<u8>) -> Self {
        Self { file_name, bytes }
    }

    /// An empty file part (browsers send one when no file was picked).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
