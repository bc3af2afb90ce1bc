//! Asset registry reads.

use assetcheck_core::{Asset, AssetListing, AssetNo, Error as CoreError, SearchFilter};
use sqlx::SqliteConnection;
use tracing::debug;

use crate::rows::{AssetRow, ListingRow, ASSET_COLUMNS};
use crate::{Result, Store};

pub(crate) async fn fetch_asset(
    conn: &mut SqliteConnection,
    asset_no: &AssetNo,
) -> Result<Option<Asset>> {
    let sql = format!("SELECT {ASSET_COLUMNS} FROM users u WHERE u.asset_no = ?");
    let row: Option<AssetRow> = sqlx::query_as(&sql)
        .bind(asset_no.as_str())
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.map(Asset::from))
}

impl Store {
    /// Looks up one asset; unknown numbers fail with not-found.
    pub async fn lookup(&self, asset_no: &AssetNo) -> Result<Asset> {
        let mut conn = self.pool.acquire().await?;
        fetch_asset(&mut conn, asset_no)
            .await?
            .ok_or_else(|| CoreError::asset_not_found(asset_no.as_str()).into())
    }

    /// Lists assets with their inspection status, ordered by asset number.
    ///
    /// Rows are filtered with [`SearchFilter::matches`], so the listing and
    /// the filter agree on what a match is.
    pub async fn list(&self, filter: &SearchFilter) -> Result<Vec<AssetListing>> {
        let sql = format!(
            "SELECT {ASSET_COLUMNS}, i.status AS status \
             FROM users u LEFT JOIN inspections i ON i.asset_no = u.asset_no \
             ORDER BY u.asset_no ASC"
        );

        let mut conn = self.pool.acquire().await?;
        let rows: Vec<ListingRow> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;

        let listings: Vec<AssetListing> = rows
            .into_iter()
            .map(AssetListing::from)
            .filter(|listing| filter.matches(&listing.asset))
            .collect();
        debug!(needle = ?filter.needle(), count = listings.len(), "Listed assets");
        Ok(listings)
    }

    /// First asset (by asset number) held by the owner with exactly this name.
    pub async fn find_by_owner(&self, name: &str) -> Result<Option<Asset>> {
        let sql = format!(
            "SELECT {ASSET_COLUMNS} FROM users u WHERE u.name = ? ORDER BY u.asset_no ASC LIMIT 1"
        );
        let mut conn = self.pool.acquire().await?;
        let row: Option<AssetRow> = sqlx::query_as(&sql)
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.map(Asset::from))
    }
}
