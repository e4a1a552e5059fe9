//! Application state shared by every handler.

use std::sync::Arc;
use vidvault_core::Config;
use vidvault_storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Storage root the gateway reads and writes. Injected so tests can point it at a
    /// temporary directory.
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }
}
