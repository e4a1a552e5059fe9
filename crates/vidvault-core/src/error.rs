//! Error types module
//!
//! All failures the gateway can report are unified under [`AppError`]. Each variant
//! describes its own HTTP presentation through [`ErrorMetadata`], so the API layer only
//! has to render what the error says about itself.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected client mistakes (missing file, bad name)
    Debug,
    /// Rejected but well-formed requests (size limit)
    Warn,
    /// Filesystem failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "DELETION_FAILED")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("File exceeds the maximum upload size of {limit} bytes")]
    SizeLimitExceeded { limit: u64 },

    #[error("Video name not provided")]
    MissingName,

    #[error("Invalid video name: {0}")]
    InvalidName(String),

    #[error("Failed to enumerate storage directory: {0}")]
    EnumerationFailed(String),

    #[error("Failed to delete video: {0}")]
    DeletionFailed(String),

    #[error("Failed to store upload: {0}")]
    UploadFailed(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::MissingFile => (400, "MISSING_FILE", false, LogLevel::Debug),
        AppError::SizeLimitExceeded { .. } => {
            (413, "SIZE_LIMIT_EXCEEDED", false, LogLevel::Warn)
        }
        AppError::MissingName => (400, "MISSING_NAME", false, LogLevel::Debug),
        AppError::InvalidName(_) => (400, "INVALID_NAME", false, LogLevel::Debug),
        AppError::EnumerationFailed(_) => (500, "ENUMERATION_FAILED", true, LogLevel::Error),
        AppError::DeletionFailed(_) => (500, "DELETION_FAILED", true, LogLevel::Error),
        AppError::UploadFailed(_) => (500, "UPLOAD_FAILED", true, LogLevel::Error),
        AppError::NotFound(_) => (404, "NOT_FOUND", false, LogLevel::Debug),
        AppError::BadRequest(_) => (400, "BAD_REQUEST", false, LogLevel::Debug),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::MissingFile => "MissingFile",
            AppError::SizeLimitExceeded { .. } => "SizeLimitExceeded",
            AppError::MissingName => "MissingName",
            AppError::InvalidName(_) => "InvalidName",
            AppError::EnumerationFailed(_) => "EnumerationFailed",
            AppError::DeletionFailed(_) => "DeletionFailed",
            AppError::UploadFailed(_) => "UploadFailed",
            AppError::NotFound(_) => "NotFound",
            AppError::BadRequest(_) => "BadRequest",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingFile => "No file uploaded.".to_string(),
            AppError::SizeLimitExceeded { limit } => {
                format!("File too large: the maximum upload size is {} bytes", limit)
            }
            AppError::MissingName => "Video name not provided.".to_string(),
            AppError::InvalidName(ref msg) => msg.clone(),
            AppError::EnumerationFailed(_) => "Error fetching videos.".to_string(),
            AppError::DeletionFailed(_) => "Error deleting video.".to_string(),
            AppError::UploadFailed(_) => "Error uploading video.".to_string(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::BadRequest(ref msg) => msg.clone(),
            AppError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}
