//! Registry ⟕ inspections join for the export.

use assetcheck_core::ReportRow;
use tracing::debug;

use crate::rows::{ReportJoinRow, ASSET_COLUMNS, JOINED_INSPECTION_COLUMNS};
use crate::{Result, Store};

impl Store {
    /// One row per asset, left-joined with its inspection, ordered by asset
    /// number. Assets without an inspection carry `None`.
    pub async fn report_rows(&self) -> Result<Vec<ReportRow>> {
        let sql = format!(
            "SELECT {ASSET_COLUMNS}, {JOINED_INSPECTION_COLUMNS} \
             FROM users u LEFT JOIN inspections i ON i.asset_no = u.asset_no \
             ORDER BY u.asset_no ASC"
        );

        let mut conn = self.pool.acquire().await?;
        let rows: Vec<ReportJoinRow> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;
        debug!(count = rows.len(), "Fetched report rows");

        rows.into_iter().map(ReportRow::try_from).collect()
    }
}
