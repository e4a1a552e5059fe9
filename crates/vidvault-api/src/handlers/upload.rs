use crate::error::{multipart_error, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use futures::StreamExt;
use std::sync::Arc;
use vidvault_core::{constants::UPLOAD_FIELD_NAME, AppError, UploadResponse};
use vidvault_storage::{derive_stored_name, StorageError};

/// Body-level failures surface inside the storage copy loop, so they are translated to
/// storage errors there and back to `AppError` at the boundary.
fn field_error(err: MultipartError, limit: u64) -> StorageError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        StorageError::SizeLimitExceeded { limit }
    } else {
        StorageError::InvalidBody(err.body_text())
    }
}

/// Best-effort removal of a file stored earlier in a request that is now failing.
async fn discard_stored(state: &AppState, name: &str) {
    if let Err(e) = state.storage.delete(name).await {
        tracing::warn!(name = %name, error = %e, "Failed to remove file of rejected upload");
    }
}

/// Walk the multipart body and store the `video` file part, recording its name in `stored`
/// as soon as it is on disk.
async fn receive_video(
    state: &AppState,
    multipart: &mut Multipart,
    limit: u64,
    stored: &mut Option<String>,
) -> Result<(), HttpAppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }
        // A plain text part named `video` is not a file.
        let Some(original_filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if stored.is_some() {
            return Err(AppError::BadRequest(format!(
                "Multiple file fields are not allowed; send exactly one field named '{}'",
                UPLOAD_FIELD_NAME
            ))
            .into());
        }

        let name = derive_stored_name(&original_filename)?;
        let body = field
            .map(move |chunk| chunk.map_err(|e| field_error(e, limit)))
            .boxed();

        let size_bytes = state.storage.upload_stream(&name, limit, body).await?;

        tracing::info!(
            original_filename = %original_filename,
            name = %name,
            size_bytes,
            "Video uploaded"
        );
        *stored = Some(name);
    }

    Ok(())
}

/// Accept one file under the `video` field and store it under its derived name.
///
/// Other fields are skipped. The file is streamed to disk chunk by chunk; nothing is
/// buffered in memory beyond the current chunk. If the request fails after the file was
/// written (a second `video` file, a broken trailing part) the stored file is removed.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_video"))]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let mut multipart = multipart?;
    let limit = state.config.max_upload_size_bytes();
    let mut stored: Option<String> = None;

    if let Err(e) = receive_video(&state, &mut multipart, limit, &mut stored).await {
        if let Some(name) = stored.as_deref() {
            discard_stored(&state, name).await;
        }
        return Err(e);
    }

    let name = stored.ok_or(AppError::MissingFile)?;

    Ok(Json(UploadResponse::for_name(&name)))
}
