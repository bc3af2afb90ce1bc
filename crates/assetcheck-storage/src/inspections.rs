//! Inspection upsert and reads.

use assetcheck_core::{
    AssetNo, ComplianceSummary, Error as CoreError, Inspection, InspectionForm, InspectionStatus,
    PhotoUpload, DATE_FORMAT, ITEM_COUNT,
};
use chrono::{Local, SecondsFormat, Utc};
use sqlx::SqliteConnection;
use tracing::{debug, info};

use crate::registry::fetch_asset;
use crate::rows::{InspectionRow, INSPECTION_COLUMNS};
use crate::{Error, Result, Store};

/// Insert-or-replace keyed by `asset_no`. Every column is rewritten except
/// `photo_path`, which keeps the stored value when no new photo is given.
const UPSERT_INSPECTION: &str = r#"
INSERT INTO inspections (
    asset_no, sticker_no, item1, item2, item3, item4, item5,
    comment, photo_path, inspect_date, inspector, status, created_at
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
ON CONFLICT(asset_no) DO UPDATE SET
    sticker_no   = excluded.sticker_no,
    item1        = excluded.item1,
    item2        = excluded.item2,
    item3        = excluded.item3,
    item4        = excluded.item4,
    item5        = excluded.item5,
    comment      = excluded.comment,
    photo_path   = COALESCE(excluded.photo_path, inspections.photo_path),
    inspect_date = excluded.inspect_date,
    inspector    = excluded.inspector,
    status       = excluded.status,
    created_at   = excluded.created_at
"#;

pub(crate) async fn fetch_inspection(
    conn: &mut SqliteConnection,
    asset_no: &AssetNo,
) -> Result<Option<Inspection>> {
    let sql = format!("SELECT {INSPECTION_COLUMNS} FROM inspections WHERE asset_no = ?");
    let row: Option<InspectionRow> = sqlx::query_as(&sql)
        .bind(asset_no.as_str())
        .fetch_optional(&mut *conn)
        .await?;
    row.map(Inspection::try_from).transpose()
}

impl Store {
    /// Records an inspection for `asset_no`, replacing any previous one.
    ///
    /// Omitted items count as a pass, a missing comment is empty, and the
    /// status is always set to `submitted`. A non-empty `photo` is written
    /// to the upload directory and replaces the stored photo reference;
    /// otherwise the previous reference is kept.
    ///
    /// The asset check, upsert and read-back share one transaction. Unknown
    /// assets fail with not-found before anything is written. Concurrent
    /// submissions serialize on the write lock; the last to commit wins.
    pub async fn submit(
        &self,
        asset_no: &AssetNo,
        form: InspectionForm,
        photo: Option<PhotoUpload>,
    ) -> Result<Inspection> {
        // Take the write lock up front: a deferred transaction that reads
        // first cannot upgrade under WAL once another writer has committed.
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let asset = fetch_asset(&mut tx, asset_no)
            .await?
            .ok_or_else(|| CoreError::asset_not_found(asset_no.as_str()))?;

        let now = Local::now();
        let submission = form.into_submission(&asset, now.date_naive())?;

        let photo_path = match photo.filter(|p| !p.is_empty()) {
            Some(upload) => Some(self.photos.save(asset_no, &upload, now).await?),
            None => None,
        };

        let [item1, item2, item3, item4, item5] = submission.items.flags();
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        sqlx::query(UPSERT_INSPECTION)
            .bind(asset_no.as_str())
            .bind(&submission.sticker_no)
            .bind(item1)
            .bind(item2)
            .bind(item3)
            .bind(item4)
            .bind(item5)
            .bind(&submission.comment)
            .bind(photo_path.as_deref())
            .bind(submission.inspect_date.format(DATE_FORMAT).to_string())
            .bind(submission.inspector.as_deref())
            .bind(InspectionStatus::Submitted.as_str())
            .bind(&created_at)
            .execute(&mut *tx)
            .await?;

        let inspection = fetch_inspection(&mut tx, asset_no)
            .await?
            .ok_or_else(|| Error::corrupt(asset_no.as_str(), "row missing after upsert"))?;
        tx.commit().await?;

        info!(
            asset_no = %asset_no,
            failed = inspection.items.failed(),
            photo = inspection.photo_path.is_some(),
            "Inspection submitted"
        );
        Ok(inspection)
    }

    /// Latest inspection of an asset, `None` if it was never inspected.
    pub async fn inspection(&self, asset_no: &AssetNo) -> Result<Option<Inspection>> {
        let mut conn = self.pool.acquire().await?;
        fetch_inspection(&mut conn, asset_no).await
    }

    /// Compliance over all submitted inspections.
    pub async fn summary(&self) -> Result<ComplianceSummary> {
        let mut conn = self.pool.acquire().await?;
        let (total, passed): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(item1 + item2 + item3 + item4 + item5), 0) \
             FROM inspections WHERE status = ?",
        )
        .bind(InspectionStatus::Submitted.as_str())
        .fetch_one(&mut *conn)
        .await?;

        let total = u64::try_from(total).unwrap_or_default();
        let passed = u64::try_from(passed).unwrap_or_default();
        let failed = (total * ITEM_COUNT as u64).saturating_sub(passed);
        debug!(total, passed, failed, "Computed compliance summary");
        Ok(ComplianceSummary::from_counts(total, passed, failed))
    }
}
