use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use vidvault_core::{AppError, MessageResponse};
use vidvault_storage::validate_name;

#[tracing::instrument(skip(state), fields(operation = "delete_video"))]
pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    Path(video_name): Path<String>,
) -> Result<Json<MessageResponse>, HttpAppError> {
    if video_name.is_empty() {
        return Err(AppError::MissingName.into());
    }

    // Names that would escape the storage root are refused before any filesystem call.
    validate_name(&video_name)?;

    state.storage.delete(&video_name).await?;

    tracing::info!(name = %video_name, "Video deleted");

    Ok(Json(MessageResponse::new("Video deleted successfully.")))
}

/// `DELETE /delete` and `DELETE /delete/` carry no name segment.
pub async fn delete_without_name() -> HttpAppError {
    AppError::MissingName.into()
}
