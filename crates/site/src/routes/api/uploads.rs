//! File upload handlers.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::services::uploads::{StoredUpload, UploadKind};
use crate::state::AppState;

/// Upload response body.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(flatten)]
    pub stored: StoredUpload,
}

/// Accept a multipart upload with `file` and `type` fields.
///
/// POST /api/admin/uploads
///
/// The `type` field selects the destination subdirectory and may precede
/// or follow the file part.
#[instrument(skip(state, multipart), fields(admin = %admin.username))]
pub async fn upload(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>)> {
    let mut kind: Option<UploadKind> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("type") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid type field: {e}")))?;
                kind = Some(value.parse()?);
            }
            Some("file") => {
                let content_type = field
                    .content_type()
                    .ok_or_else(|| {
                        AppError::Validation("File part must declare a content type".to_string())
                    })?
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
                file = Some((content_type, data.to_vec()));
            }
            _ => {}
        }
    }

    let kind = kind.ok_or_else(|| AppError::Validation("type field is required".to_string()))?;
    let (content_type, data) =
        file.ok_or_else(|| AppError::Validation("file field is required".to_string()))?;

    let stored = state.uploads().store(kind, &content_type, &data).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            success: true,
            stored,
        }),
    ))
}

/// Delete an uploaded file by type and filename.
///
/// DELETE /api/admin/uploads/{type}/{filename}
#[instrument(skip(state), fields(admin = %admin.username))]
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((kind, filename)): Path<(String, String)>,
) -> Result<StatusCode> {
    let kind: UploadKind = kind.parse()?;
    state.uploads().delete(kind, &filename).await?;
    Ok(StatusCode::NO_CONTENT)
}
