//! Raw row shapes and their conversion into domain types.

use assetcheck_core::{
    Asset, AssetListing, Inspection, InspectionStatus, ItemResults, ReportRow, DATE_FORMAT,
};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::{Error, Result};

/// Column list for [`AssetRow`].
pub(crate) const ASSET_COLUMNS: &str = "u.asset_no AS asset_no, u.name AS name, \
     u.department AS department, u.sticker_no AS sticker_no";

/// Column list for [`InspectionRow`].
pub(crate) const INSPECTION_COLUMNS: &str = "asset_no, sticker_no, item1, item2, item3, \
     item4, item5, comment, photo_path, inspect_date, inspector, status, created_at";

/// Inspection columns aliased with an `i_` prefix for the report join.
pub(crate) const JOINED_INSPECTION_COLUMNS: &str = "i.asset_no AS i_asset_no, \
     i.sticker_no AS i_sticker_no, i.item1 AS i_item1, i.item2 AS i_item2, \
     i.item3 AS i_item3, i.item4 AS i_item4, i.item5 AS i_item5, i.comment AS i_comment, \
     i.photo_path AS i_photo_path, i.inspect_date AS i_inspect_date, \
     i.inspector AS i_inspector, i.status AS i_status, i.created_at AS i_created_at";

#[derive(Debug, FromRow)]
pub(crate) struct AssetRow {
    pub asset_no: String,
    pub name: String,
    pub department: String,
    pub sticker_no: String,
}

impl From<AssetRow> for Asset {
    fn from(row: AssetRow) -> Self {
        Asset::new(row.asset_no, row.name, row.department, row.sticker_no)
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct ListingRow {
    #[sqlx(flatten)]
    pub asset: AssetRow,
    pub status: Option<String>,
}

impl From<ListingRow> for AssetListing {
    fn from(row: ListingRow) -> Self {
        AssetListing {
            asset: row.asset.into(),
            status: row.status.as_deref().and_then(InspectionStatus::parse),
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct InspectionRow {
    pub asset_no: String,
    pub sticker_no: Option<String>,
    pub item1: i64,
    pub item2: i64,
    pub item3: i64,
    pub item4: i64,
    pub item5: i64,
    pub comment: String,
    pub photo_path: Option<String>,
    pub inspect_date: Option<String>,
    pub inspector: Option<String>,
    pub status: Option<String>,
    pub created_at: String,
}

impl TryFrom<InspectionRow> for Inspection {
    type Error = Error;

    fn try_from(row: InspectionRow) -> Result<Self> {
        let corrupt = |message: String| Error::corrupt(row.asset_no.clone(), message);

        let items = ItemResults::from_flags([row.item1, row.item2, row.item3, row.item4, row.item5])
            .map_err(|e| corrupt(e.to_string()))?;

        let raw_date = row
            .inspect_date
            .as_deref()
            .ok_or_else(|| corrupt("inspect_date is null".to_string()))?;
        let inspect_date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
            .map_err(|e| corrupt(format!("inspect_date '{raw_date}': {e}")))?;

        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| corrupt(format!("created_at '{}': {e}", row.created_at)))?
            .with_timezone(&Utc);

        let status = row
            .status
            .as_deref()
            .and_then(InspectionStatus::parse)
            .ok_or_else(|| corrupt(format!("unknown status {:?}", row.status)))?;

        Ok(Inspection {
            asset_no: row.asset_no.as_str().into(),
            sticker_no: row.sticker_no.unwrap_or_default(),
            items,
            comment: row.comment,
            photo_path: row.photo_path,
            inspect_date,
            inspector: row.inspector,
            status,
            created_at,
        })
    }
}

/// Left-join row: asset columns plus nullable inspection columns.
#[derive(Debug, FromRow)]
pub(crate) struct ReportJoinRow {
    #[sqlx(flatten)]
    pub asset: AssetRow,
    pub i_asset_no: Option<String>,
    pub i_sticker_no: Option<String>,
    pub i_item1: Option<i64>,
    pub i_item2: Option<i64>,
    pub i_item3: Option<i64>,
    pub i_item4: Option<i64>,
    pub i_item5: Option<i64>,
    pub i_comment: Option<String>,
    pub i_photo_path: Option<String>,
    pub i_inspect_date: Option<String>,
    pub i_inspector: Option<String>,
    pub i_status: Option<String>,
    pub i_created_at: Option<String>,
}

impl TryFrom<ReportJoinRow> for ReportRow {
    type Error = Error;

    fn try_from(row: ReportJoinRow) -> Result<Self> {
        let inspection = match row.i_asset_no {
            None => None,
            Some(asset_no) => {
                let missing = |column: &str| Error::corrupt(asset_no.clone(), format!("{column} is null"));
                let inspection_row = InspectionRow {
                    sticker_no: row.i_sticker_no,
                    item1: row.i_item1.ok_or_else(|| missing("item1"))?,
                    item2: row.i_item2.ok_or_else(|| missing("item2"))?,
                    item3: row.i_item3.ok_or_else(|| missing("item3"))?,
                    item4: row.i_item4.ok_or_else(|| missing("item4"))?,
                    item5: row.i_item5.ok_or_else(|| missing("item5"))?,
                    comment: row.i_comment.unwrap_or_default(),
                    photo_path: row.i_photo_path,
                    inspect_date: row.i_inspect_date,
                    inspector: row.i_inspector,
                    status: row.i_status,
                    created_at: row.i_created_at.ok_or_else(|| missing("created_at"))?,
                    asset_no,
                };
                Some(Inspection::try_from(inspection_row)?)
            }
        };

        Ok(ReportRow {
            asset: row.asset.into(),
            inspection,
        })
    }
}
