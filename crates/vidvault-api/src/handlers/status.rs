use axum::Json;
use vidvault_core::StatusResponse;

/// Liveness probe - process is running and accepting requests.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::up())
}
