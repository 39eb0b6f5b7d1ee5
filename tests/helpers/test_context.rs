//! Test context for unified test setup
//!
//! Starts a mock backend, points settings at it and keeps the session file
//! in a temporary directory.

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use orbitview::config::Settings;
use orbitview::services::ServiceFactory;
use orbitview::state::{FileStorage, PersistedSession, SessionCache, SessionStorage};

use super::backend_mock::BackendMockServer;

/// Unified test context that manages all test components
pub struct TestContext {
    pub backend: BackendMockServer,
    pub settings: Settings,
    pub services: ServiceFactory,
    pub storage: Arc<FileStorage>,
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with all components initialized
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // Initialize logging once
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let temp_dir = tempfile::tempdir()?;
        let backend = BackendMockServer::new().await;
        let settings = Self::create_test_settings(&backend, &temp_dir);
        settings.validate()?;

        let services = ServiceFactory::new(&settings)?;
        let storage = Arc::new(FileStorage::new(&settings.session.storage_path));

        Ok(Self {
            backend,
            settings,
            services,
            storage,
            temp_dir,
        })
    }

    fn create_test_settings(backend: &BackendMockServer, temp_dir: &TempDir) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = backend.base_url();
        settings.api.timeout_seconds = 5;
        settings.session.storage_path = temp_dir
            .path()
            .join("session.json")
            .to_string_lossy()
            .into_owned();
        settings.logging.level = "debug".to_string();
        settings
    }

    /// A fresh cache over the shared session file, as a new process would see it
    pub fn session(&self) -> SessionCache {
        let storage: Arc<dyn SessionStorage> = self.storage.clone();
        SessionCache::new(
            self.services.auth_service.clone(),
            storage,
            self.settings.session.storage_key.clone(),
        )
    }

    pub fn storage_path(&self) -> PathBuf {
        self.storage.path().to_path_buf()
    }

    /// Raw value under the session key
    pub fn stored_value(&self) -> Option<String> {
        self.storage
            .get_item(&self.settings.session.storage_key)
            .expect("Failed to read session storage")
    }

    pub fn stored_session(&self) -> Option<PersistedSession> {
        self.stored_value().as_deref().and_then(PersistedSession::parse)
    }

    /// Write a session directly, bypassing login
    pub fn store_token(&self, token: &str) {
        self.storage
            .set_item(&self.settings.session.storage_key, token)
            .expect("Failed to write session storage");
    }
}
