//! Test helpers: build the router over a per-test temporary storage root.
//!
//! Run with: `cargo test -p vidvault-api`

pub mod fixtures;

use axum_test::TestServer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use vidvault_api::setup::routes;
use vidvault_api::state::AppState;
use vidvault_core::Config;
use vidvault_storage::{LocalStorage, Storage};

/// Test application: server plus the temporary directory it owns.
pub struct TestApp {
    pub server: TestServer,
    pub storage_root: PathBuf,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    /// Parent of the storage root, used to check nothing escapes it.
    pub fn outside_root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Sorted names currently on disk, read straight from the filesystem.
    pub fn files_on_disk(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.storage_root)
            .expect("storage root readable")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Setup test app with the default 5 GiB limit.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_config(Config::default()).await
}

/// Setup test app with a custom per-file upload limit.
pub async fn setup_test_app_with_limit(max_upload_size_bytes: u64) -> TestApp {
    setup_test_app_with_config(Config {
        max_upload_size_bytes,
        ..Config::default()
    })
    .await
}

pub async fn setup_test_app_with_config(config: Config) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage_root = temp_dir.path().join("uploads");

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(&storage_root)
            .await
            .expect("Failed to create local storage"),
    );

    let config = Config {
        uploads_dir: storage_root.clone(),
        ..config
    };
    let state = Arc::new(AppState::new(config.clone(), storage));
    let router = routes::setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        storage_root,
        temp_dir,
    }
}
