//! Storage setup and initialization

use anyhow::{Context, Result};
use std::sync::Arc;
use vidvault_core::Config;
use vidvault_storage::{LocalStorage, Storage};

/// Create the storage root if needed and return the backend serving it.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(path = %config.uploads_dir().display(), "Initializing storage...");

    let storage = LocalStorage::new(config.uploads_dir())
        .await
        .context("Storage root could not be created")?;

    tracing::info!(
        path = %storage.root().display(),
        "Storage initialized successfully"
    );

    Ok(Arc::new(storage))
}
