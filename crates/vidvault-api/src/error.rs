//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`. [`AppError`] and [`StorageError`] both
//! become an `HttpAppError` through `?` and are rendered with a consistent status, body
//! and log line.

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use vidvault_core::{AppError, ErrorMetadata, LogLevel};
use vidvault_storage::StorageError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from vidvault-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// A request that is not multipart at all carries no file.
impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Upload request is not multipart");
        HttpAppError(AppError::MissingFile)
    }
}

/// Failure while walking the multipart body; `limit` is the configured upload limit.
pub fn multipart_error(err: MultipartError, limit: u64) -> HttpAppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        HttpAppError(AppError::SizeLimitExceeded { limit })
    } else {
        HttpAppError(AppError::BadRequest(format!(
            "Failed to read multipart: {}",
            err.body_text()
        )))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Error occurred");
        }
    }
}

fn is_production_env() -> bool {
    std::env::var("ENVIRONMENT")
        .or_else(|_| std::env::var("APP_ENV"))
        .map(|env| env.to_lowercase() == "production" || env.to_lowercase() == "prod")
        .unwrap_or(false)
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        // Filesystem failures never leak paths or OS messages to clients.
        let details = if is_production_env() || app_error.is_sensitive() {
            None
        } else {
            Some(app_error.to_string())
        };

        let body = Json(ErrorResponse {
            error: app_error.client_message(),
            code: app_error.error_code().to_string(),
            details,
        });

        (status, body).into_response()
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::UploadFailed(msg) => AppError::UploadFailed(msg),
            StorageError::SizeLimitExceeded { limit } => AppError::SizeLimitExceeded { limit },
            StorageError::InvalidBody(msg) => AppError::BadRequest(msg),
            StorageError::ListFailed(msg) => AppError::EnumerationFailed(msg),
            StorageError::DeleteFailed(msg) => AppError::DeletionFailed(msg),
            StorageError::InvalidName(msg) => AppError::InvalidName(msg),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage_error_list_failed() {
        let HttpAppError(app_err) = StorageError::ListFailed("gone".to_string()).into();
        match app_err {
            AppError::EnumerationFailed(msg) => assert_eq!(msg, "gone"),
            _ => panic!("Expected EnumerationFailed variant"),
        }
    }

    #[test]
    fn test_from_storage_error_delete_failed() {
        let HttpAppError(app_err) = StorageError::DeleteFailed("ENOENT".to_string()).into();
        assert!(matches!(app_err, AppError::DeletionFailed(_)));
        assert_eq!(app_err.http_status_code(), 500);
    }

    #[test]
    fn test_from_storage_error_size_limit() {
        let HttpAppError(app_err) = StorageError::SizeLimitExceeded { limit: 64 }.into();
        assert!(matches!(app_err, AppError::SizeLimitExceeded { limit: 64 }));
        assert_eq!(app_err.http_status_code(), 413);
    }

    #[test]
    fn test_from_storage_error_invalid_name() {
        let HttpAppError(app_err) = StorageError::InvalidName("bad".to_string()).into();
        assert!(matches!(app_err, AppError::InvalidName(_)));
        assert_eq!(app_err.http_status_code(), 400);
    }

    #[test]
    fn test_from_storage_error_config_error() {
        let HttpAppError(app_err) = StorageError::ConfigError("no root".to_string()).into();
        match app_err {
            AppError::Internal(msg) => assert_eq!(msg, "no root"),
            _ => panic!("Expected Internal variant"),
        }
    }

    #[test]
    fn test_deletion_failure_renders_server_error() {
        let response =
            HttpAppError(AppError::DeletionFailed("/srv/uploads/x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse {
            error: "No file uploaded.".to_string(),
            code: "MISSING_FILE".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["error"], "No file uploaded.");
        assert_eq!(json["code"], "MISSING_FILE");
        assert!(json.get("details").is_none());
    }
}
