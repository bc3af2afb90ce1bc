//! Request body extraction for inspection submissions.

use assetcheck_core::{InspectionForm, PhotoUpload};
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use tracing::debug;

use crate::{Error, Result};

/// Name of the multipart part carrying the photo.
pub const PHOTO_FIELD: &str = "photo";

/// A decoded inspection submission.
///
/// Accepts `multipart/form-data` (fields plus an optional `photo` file part)
/// or `application/x-www-form-urlencoded` (fields only).
#[derive(Debug, Clone, Default)]
pub struct InspectionPayload {
    /// Typed form fields
    pub form: InspectionForm,
    /// Photo part, if one was sent
    pub photo: Option<PhotoUpload>,
}

impl<S> FromRequest<S> for InspectionPayload
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rej| Error::rejected(rej.status(), rej.body_text()))?;
            read_multipart(multipart).await
        } else {
            let Form(form) = Form::<InspectionForm>::from_request(req, state)
                .await
                .map_err(|rej| Error::rejected(rej.status(), rej.body_text()))?;
            Ok(Self { form, photo: None })
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<InspectionPayload> {
    let mut payload = InspectionPayload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::rejected(e.status(), e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == PHOTO_FIELD {
            let file_name = field.file_name().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| Error::rejected(e.status(), e.body_text()))?;
            debug!(file_name = ?file_name, bytes = bytes.len(), "Received photo part");
            payload.photo = Some(PhotoUpload::new(file_name, bytes.to_vec()));
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| Error::rejected(e.status(), e.body_text()))?;
            payload.form.set_field(&name, value)?;
        }
    }

    Ok(payload)
}
