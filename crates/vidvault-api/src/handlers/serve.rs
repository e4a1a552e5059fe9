//! Static retrieval of stored files under `/videos/{name}`.
//!
//! Serving is delegated to `tower_http`'s `ServeFile`, which takes care of content type,
//! `Range` requests and conditional headers.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Path, Request, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use vidvault_core::AppError;

#[tracing::instrument(skip(state, request), fields(operation = "serve_video"))]
pub async fn serve_video(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    request: Request,
) -> Response {
    let path = match state.storage.file_path(&name) {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!(error = %e, "Refusing to serve invalid name");
            return not_found();
        }
    };

    // Directories show up in listings but have no content to serve.
    match tokio::fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => {}
        _ => return not_found(),
    }

    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

fn not_found() -> Response {
    HttpAppError::from(AppError::NotFound("Video not found".to_string())).into_response()
}
