//! Table definitions and the one-time roster seed.
//!
//! Both steps are idempotent: tables are created with `IF NOT EXISTS` and the
//! roster is only inserted into an empty `users` table.

use assetcheck_core::Asset;
use sqlx::SqliteConnection;
use tracing::{debug, info};

use crate::Result;

/// `users` holds the asset registry; `asset_no` is its natural key.
const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    department  TEXT NOT NULL,
    asset_no    TEXT NOT NULL UNIQUE,
    sticker_no  TEXT NOT NULL
)
"#;

/// `inspections` holds at most one row per asset.
const CREATE_INSPECTIONS: &str = r#"
CREATE TABLE IF NOT EXISTS inspections (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    asset_no      TEXT NOT NULL UNIQUE REFERENCES users(asset_no),
    sticker_no    TEXT,
    item1         INTEGER NOT NULL,
    item2         INTEGER NOT NULL,
    item3         INTEGER NOT NULL,
    item4         INTEGER NOT NULL,
    item5         INTEGER NOT NULL,
    comment       TEXT NOT NULL DEFAULT '',
    photo_path    TEXT,
    inspect_date  TEXT,
    inspector     TEXT,
    status        TEXT,
    created_at    TEXT NOT NULL
)
"#;

/// Create both tables if they do not exist yet.
pub async fn create_tables(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(CREATE_USERS).execute(&mut *conn).await?;
    sqlx::query(CREATE_INSPECTIONS).execute(&mut *conn).await?;
    debug!("Schema ensured");
    Ok(())
}

/// Insert `roster` when the registry is empty. Returns the number of rows
/// inserted (0 when the registry was already populated).
pub async fn seed_roster(conn: &mut SqliteConnection, roster: &[Asset]) -> Result<usize> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *conn)
        .await?;
    if existing > 0 {
        debug!(existing, "Registry already seeded");
        return Ok(0);
    }

    for asset in roster {
        sqlx::query(
            "INSERT INTO users (name, department, asset_no, sticker_no) VALUES (?, ?, ?, ?)",
        )
        .bind(&asset.name)
        .bind(&asset.department)
        .bind(asset.asset_no.as_str())
        .bind(&asset.sticker_no)
        .execute(&mut *conn)
        .await?;
    }

    info!(count = roster.len(), "Seeded asset registry");
    Ok(roster.len())
}
