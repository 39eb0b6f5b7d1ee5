//! Services module
//!
//! This module contains the backend-facing services

pub mod api;
pub mod auth;
pub mod profile;
pub mod resources;

// Re-export commonly used services
pub use api::ApiClient;
pub use auth::AuthService;
pub use profile::ProfileService;
pub use resources::{ResourceService, ResourceBundle};

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub resource_service: ResourceService,
    pub profile_service: ProfileService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one HTTP client
    pub fn new(settings: &Settings) -> Result<Self> {
        let api = ApiClient::new(&settings.api)?;

        Ok(Self {
            auth_service: AuthService::new(api.clone()),
            resource_service: ResourceService::new(api.clone(), settings.api.page_size),
            profile_service: ProfileService::new(api),
        })
    }
}
