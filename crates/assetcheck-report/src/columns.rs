//! Flat projection of report rows into spreadsheet cells.

use std::borrow::Cow;

use assetcheck_core::{ReportRow, DATE_FORMAT};
use chrono::SecondsFormat;

/// Header row, in column order.
pub const COLUMNS: [&str; 16] = [
    "asset_no",
    "name",
    "department",
    "default_sticker_no",
    "sticker_no",
    "item1",
    "item2",
    "item3",
    "item4",
    "item5",
    "comment",
    "photo_path",
    "inspect_date",
    "inspector",
    "status",
    "created_at",
];

/// Longest string a spreadsheet cell accepts, in characters.
pub const MAX_CELL_CHARS: usize = 32_767;

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    /// Text cell
    Text(Cow<'a, str>),
    /// Numeric cell (item flags)
    Number(f64),
    /// Null field
    Empty,
}

impl<'a> Cell<'a> {
    /// Text cell, cut to [`MAX_CELL_CHARS`].
    fn text(s: &'a str) -> Self {
        match s.char_indices().nth(MAX_CELL_CHARS) {
            Some((end, _)) => Cell::Text(Cow::Borrowed(&s[..end])),
            None => Cell::Text(Cow::Borrowed(s)),
        }
    }

    fn opt_text(s: Option<&'a str>) -> Self {
        s.map_or(Cell::Empty, Cell::text)
    }
}

/// Cells of `row` in [`COLUMNS`] order. Inspection columns are empty when
/// the asset has no inspection.
pub fn cells(row: &ReportRow) -> Vec<Cell<'_>> {
    let asset = &row.asset;
    let mut out = Vec::with_capacity(COLUMNS.len());
    out.push(Cell::text(asset.asset_no.as_str()));
    out.push(Cell::text(&asset.name));
    out.push(Cell::text(&asset.department));
    out.push(Cell::text(&asset.sticker_no));

    match &row.inspection {
        None => out.extend(std::iter::repeat_n(Cell::Empty, COLUMNS.len() - 4)),
        Some(i) => {
            out.push(Cell::text(&i.sticker_no));
            out.extend(i.items.flags().iter().map(|&f| Cell::Number(f as f64)));
            out.push(Cell::text(&i.comment));
            out.push(Cell::opt_text(i.photo_path.as_deref()));
            out.push(Cell::Text(Cow::Owned(
                i.inspect_date.format(DATE_FORMAT).to_string(),
            )));
            out.push(Cell::opt_text(i.inspector.as_deref()));
            out.push(Cell::text(i.status.as_str()));
            out.push(Cell::Text(Cow::Owned(
                i.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            )));
        }
    }
    debug_assert_eq!(out.len(), COLUMNS.len());
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use assetcheck_core::{Asset, Inspection, InspectionStatus, ItemResults};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn asset() -> Asset {
        Asset::new("PC-002", "Minsu Lee", "Development", "ST-1002")
    }

    fn inspection(comment: &str) -> Inspection {
        Inspection {
            asset_no: "PC-002".into(),
            sticker_no: "ST-1002".into(),
            items: ItemResults::from_flags([1, 0, 1, 1, 1]).unwrap(),
            comment: comment.into(),
            photo_path: None,
            inspect_date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            inspector: Some("Jane".into()),
            status: InspectionStatus::Submitted,
            created_at: Utc.with_ymd_and_hms(2026, 10, 18, 1, 2, 3).single().unwrap(),
        }
    }

    #[test]
    fn test_cells_without_inspection() {
        let row = ReportRow {
            asset: asset(),
            inspection: None,
        };
        let cells = cells(&row);
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[0], Cell::Text("PC-002".into()));
        assert_eq!(cells[3], Cell::Text("ST-1002".into()));
        assert!(cells[4..].iter().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn test_cells_with_inspection() {
        let row = ReportRow {
            asset: asset(),
            inspection: Some(inspection("dust on vents")),
        };
        let cells = cells(&row);
        assert_eq!(cells[5], Cell::Number(1.0));
        assert_eq!(cells[6], Cell::Number(0.0));
        assert_eq!(cells[10], Cell::Text("dust on vents".into()));
        assert_eq!(cells[11], Cell::Empty);
        assert_eq!(cells[12], Cell::Text("2026-10-18".into()));
        assert_eq!(cells[14], Cell::Text("submitted".into()));
        assert_eq!(cells[15], Cell::Text("2026-10-18T01:02:03Z".into()));
    }

    #[test]
    fn test_long_text_is_cut_to_cell_limit() {
        let row = ReportRow {
            asset: asset(),
            inspection: Some(inspection(&"x".repeat(40_000))),
        };
        let cells = cells(&row);
        match &cells[10] {
            Cell::Text(text) => assert_eq!(text.chars().count(), MAX_CELL_CHARS),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_cut_respects_multibyte_chars() {
        let long = "é".repeat(MAX_CELL_CHARS + 5);
        match Cell::text(&long) {
            Cell::Text(text) => {
                assert_eq!(text.chars().count(), MAX_CELL_CHARS);
                assert!(text.chars().all(|c| c == 'é'));
            }
            other => panic!("expected text, got {other:?}"),
        }
        let exact = "y".repeat(MAX_CELL_CHARS);
        assert_eq!(Cell::text(&exact), Cell::Text(Cow::Borrowed(exact.as_str())));
    }
}
