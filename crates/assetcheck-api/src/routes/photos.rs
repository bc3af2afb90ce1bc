//! Stored photo downloads.

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;
use crate::{Error, Result};

/// Content type guessed from a file extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// `GET /photos/{file}`
///
/// Only plain file names inside the upload directory are served; anything
/// else is a 404.
pub async fn photo(State(state): State<AppState>, Path(file): Path<String>) -> Result<Response> {
    let path = state
        .store
        .photos()
        .resolve(&file)
        .ok_or_else(|| Error::NotFound(format!("photo {file}")))?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| Error::io_with_path(e, &path))?;

    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static(content_type_for(&file))),
            (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        ],
        bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("a.JPG"), "image/jpeg");
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
        assert_eq!(content_type_for("x.exe"), "application/octet-stream");
    }
}
