use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use vidvault_core::VideoEntry;

/// Every entry of the storage root, in directory order.
#[tracing::instrument(skip(state), fields(operation = "list_videos"))]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VideoEntry>>, HttpAppError> {
    let names = state.storage.list().await?;

    Ok(Json(names.into_iter().map(VideoEntry::new).collect()))
}
