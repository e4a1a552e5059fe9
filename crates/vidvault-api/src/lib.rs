//! Vidvault API Library
//!
//! HTTP handlers, error rendering and application setup for the video file-store gateway.

mod handlers;

pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
