//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Scheme placed before the token in the Authorization header
    pub auth_scheme: String,
    pub page_size: u32,
}

/// Persisted session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    pub storage_path: String,
    pub storage_key: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; console only when unset
    pub file_path: Option<String>,
    /// Write the log file as JSON lines
    pub json: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_seconds: 10,
            auth_scheme: "JWT".to_string(),
            page_size: 10,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_path: ".orbitview/session.json".to_string(),
            storage_key: "orbitview_access_token".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file_path: None,
            json: false,
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` (if present) and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Load settings from an explicit file, or `config.toml` in the working directory.
    ///
    /// Environment variables use the `ORBITVIEW_` prefix and `__` between
    /// section and key, e.g. `ORBITVIEW_API__BASE_URL`.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file_source = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let settings = config::Config::builder()
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix("ORBITVIEW")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::OrbitViewError> {
        super::validation::validate_settings(self)
    }
}
