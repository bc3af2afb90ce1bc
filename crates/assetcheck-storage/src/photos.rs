//! Filesystem storage for inspection photos.
//!
//! Photos are written under the upload directory as
//! `{asset_no}_{YYYYmmddHHMMSS}_{name}`, where `name` is the sanitized client
//! filename or a generated UUID. Files are never overwritten; a name clash
//! gets a UUID inserted. Writes are not transactional with the database.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use assetcheck_core::util::{base_name, sanitize_component};
use assetcheck_core::{AssetNo, PhotoUpload};
use chrono::{DateTime, Local};
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use crate::{Error, Result};

/// Timestamp format embedded in stored photo names.
pub const PHOTO_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Photo directory handle.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    dir: PathBuf,
}

impl PhotoStore {
    /// Creates a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Upload directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the upload directory if needed.
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Error::io_with_path(e, &self.dir))
    }

    /// Name a photo would be stored under.
    pub fn stored_name(asset_no: &AssetNo, upload: &PhotoUpload, at: DateTime<Local>) -> String {
        let asset = sanitize_component(asset_no.as_str()).unwrap_or_else(|| "asset".to_string());
        let stamp = at.format(PHOTO_TIMESTAMP_FORMAT);
        let client = upload
            .file_name
            .as_deref()
            .map(base_name)
            .and_then(sanitize_component)
            .unwrap_or_else(|| Uuid::new_v4().simple().to_string());
        format!("{asset}_{stamp}_{client}")
    }

    /// Writes `upload` and returns the stored path as recorded on the
    /// inspection.
    pub async fn save(
        &self,
        asset_no: &AssetNo,
        upload: &PhotoUpload,
        at: DateTime<Local>,
    ) -> Result<String> {
        self.ensure_dir().await?;

        let name = Self::stored_name(asset_no, upload, at);
        let path = match self.write_new(&name, &upload.bytes).await {
            Ok(path) => path,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                let retry = format!("{}_{name}", Uuid::new_v4().simple());
                self.write_new(&retry, &upload.bytes)
                    .await
                    .map_err(|e| Error::io_with_path(e, self.dir.join(&retry)))?
            }
            Err(e) => return Err(Error::io_with_path(e, self.dir.join(&name))),
        };

        debug!(asset_no = %asset_no, path = %path.display(), bytes = upload.bytes.len(), "Stored photo");
        Ok(path.display().to_string())
    }

    async fn write_new(&self, name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.dir.join(name);
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        Ok(path)
    }

    /// Resolves a file name requested over HTTP to a stored photo.
    ///
    /// Anything that is not a plain, already-sanitized file name (path
    /// separators, `..`, hidden files) is rejected.
    pub fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        if sanitize_component(file_name).as_deref() != Some(file_name) {
            return None;
        }
        let path = self.dir.join(file_name);
        path.is_file().then_some(path)
    }
}

/// File name part of a stored photo path, as used in `/photos/{file}` links.
pub fn photo_file_name(stored: &str) -> Option<&str> {
    Path::new(stored).file_name().and_then(|n| n.to_str())
}
