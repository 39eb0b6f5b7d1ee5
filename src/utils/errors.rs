//! Error handling for OrbitView
//!
//! This module defines the main error type used throughout the client
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the OrbitView client
#[derive(Error, Debug)]
pub enum OrbitViewError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for OrbitView operations
pub type Result<T> = std::result::Result<T, OrbitViewError>;

impl From<config::ConfigError> for OrbitViewError {
    fn from(err: config::ConfigError) -> Self {
        OrbitViewError::Config(err.to_string())
    }
}

impl OrbitViewError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            OrbitViewError::Http(_) => true,
            OrbitViewError::Api { status, .. } => *status >= 500 || *status == 429,
            OrbitViewError::Serialization(_) => false,
            OrbitViewError::Io(_) => true,
            OrbitViewError::UrlParse(_) => false,
            OrbitViewError::Config(_) => false,
            OrbitViewError::Authentication(_) => false,
            OrbitViewError::NotAuthenticated => false,
            OrbitViewError::InvalidInput(_) => false,
            OrbitViewError::NotFound(_) => false,
        }
    }

    /// Whether the backend rejected the credentials attached to the request
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, OrbitViewError::Api { status: 401 | 403, .. })
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OrbitViewError::Config(_) => ErrorSeverity::Critical,
            OrbitViewError::Authentication(_) => ErrorSeverity::Warning,
            OrbitViewError::NotAuthenticated => ErrorSeverity::Warning,
            OrbitViewError::InvalidInput(_) => ErrorSeverity::Info,
            OrbitViewError::NotFound(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
