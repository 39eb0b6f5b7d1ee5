//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the OrbitView client.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{OrbitViewError, Result};

/// Initialize logging based on configuration.
///
/// Console output goes to stderr so rendered pages on stdout stay clean.
/// The returned guard must be kept alive for the file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| OrbitViewError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "orbitview.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            let layer = if config.json {
                layer.json().boxed()
            } else {
                layer.boxed()
            };
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| OrbitViewError::Config(format!("Logging already initialized: {}", e)))?;

    debug!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a completed backend request
pub fn log_api_request(method: &str, path: &str, status: u16, duration_ms: u64) {
    if status < 400 {
        debug!(
            method = method,
            path = path,
            status = status,
            duration_ms = duration_ms,
            "API request completed"
        );
    } else {
        warn!(
            method = method,
            path = path,
            status = status,
            duration_ms = duration_ms,
            "API request failed"
        );
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log session changes (login, logout, revalidation)
pub fn log_auth_event(event: &str, username: Option<&str>, details: Option<&str>) {
    info!(
        event = event,
        username = username,
        details = details,
        "Authentication event"
    );
}

/// Log the outcome of a resource fan-out
pub fn log_fetch_summary(events: usize, programs: usize, competitions: usize, categories: &[i64]) {
    debug!(
        events = events,
        programs = programs,
        competitions = competitions,
        categories = ?categories,
        "Resources fetched"
    );
}
