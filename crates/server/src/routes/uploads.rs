//! File upload route.

use axum::{Json, extract::Multipart, extract::State, http::StatusCode};

use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::uploads::{StoredUpload, save_upload};

/// Store an uploaded file and return its public URL.
///
/// Takes the first file field of the multipart body.
///
/// # Errors
///
/// Returns `400` if no file field is present or the file fails validation.
pub async fn upload(
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<StoredUpload>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        let Some(original) = field.file_name().map(ToOwned::to_owned) else {
            continue;
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("could not read file: {e}")))?;

        let stored = save_upload(state.uploads_dir(), &original, &bytes).await?;
        return Ok((StatusCode::CREATED, Json(stored)));
    }

    Err(AppError::BadRequest("no file provided".to_string()))
}
