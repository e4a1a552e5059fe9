//! Vidvault Core Library
//!
//! Configuration, the error taxonomy and the wire models shared by the storage backend
//! and the HTTP API.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{MessageResponse, StatusResponse, UploadResponse, VideoEntry};
