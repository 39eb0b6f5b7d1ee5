//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{OrbitViewError, Result};
use super::Settings;

/// Largest page size the backend paginator accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(OrbitViewError::Config(
            "API base URL is required".to_string()
        ));
    }

    let parsed = url::Url::parse(&config.base_url)
        .map_err(|e| OrbitViewError::Config(format!("Invalid API base URL {}: {}", config.base_url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(OrbitViewError::Config(
            format!("API base URL must use http or https, got {}", parsed.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(OrbitViewError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    if config.auth_scheme.trim().is_empty() {
        return Err(OrbitViewError::Config(
            "Authorization scheme is required".to_string()
        ));
    }

    if config.page_size == 0 || config.page_size > MAX_PAGE_SIZE {
        return Err(OrbitViewError::Config(
            format!("Page size must be between 1 and {}", MAX_PAGE_SIZE)
        ));
    }

    Ok(())
}

/// Validate session persistence configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.storage_path.is_empty() {
        return Err(OrbitViewError::Config(
            "Session storage path is required".to_string()
        ));
    }

    if config.storage_key.is_empty() {
        return Err(OrbitViewError::Config(
            "Session storage key is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(OrbitViewError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(OrbitViewError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
