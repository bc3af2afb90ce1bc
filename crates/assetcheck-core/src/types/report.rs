//! Joined report rows and the compliance summary.

use serde::Serialize;

use super::asset::Asset;
use super::inspection::{Inspection, ITEM_COUNT};

/// One row of the export: an asset left-joined with its inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// The roster entry
    pub asset: Asset,
    /// Latest inspection, `None` if the asset was never inspected
    pub inspection: Option<Inspection>,
}

impl ReportRow {
    /// Inspector of this row's inspection, if any.
    pub fn inspector(&self) -> Option<&str> {
        self.inspection
            .as_ref()
            .and_then(|i| i.inspector.as_deref())
    }
}

/// First non-null inspector name across rows, in row order.
pub fn first_inspector(rows: &[ReportRow]) -> Option<&str> {
    rows.iter().find_map(ReportRow::inspector)
}

/// Aggregate over all submitted inspections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceSummary {
    /// Number of submitted inspections
    pub total: u64,
    /// Passed items as a percentage of all items, one decimal
    pub compliance: f64,
    /// Number of failed items across all inspections
    pub weak_count: u64,
}

impl ComplianceSummary {
    /// Builds the summary from raw counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetcheck_core::ComplianceSummary;
    ///
    /// let s = ComplianceSummary::from_counts(1, 4, 1);
    /// assert_eq!(s.compliance, 80.0);
    /// assert_eq!(ComplianceSummary::from_counts(0, 0, 0).compliance, 0.0);
    /// ```
    pub fn from_counts(total: u64, passed_items: u64, failed_items: u64) -> Self {
        let compliance = if total == 0 {
            0.0
        } else {
            let ratio = passed_items as f64 / (total as f64 * ITEM_COUNT as f64) * 100.0;
            (ratio * 10.0).round() / 10.0
        };
        Self {
            total,
            compliance,
            weak_count: if total == 0 { 0 } else { failed_items },
        }
    }
}
