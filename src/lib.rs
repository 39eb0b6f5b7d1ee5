//! OrbitView
//!
//! Client for the OrbitView career-opportunities platform.
//! This library provides the API client, the persisted session cache,
//! resource discovery (merge, filter and search over events, programs and
//! competitions) and the page handlers used by the command-line front-end.

pub mod config;
pub mod discovery;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{OrbitViewError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use state::{SessionCache, SessionStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
