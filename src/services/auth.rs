//! Authentication service implementation
//!
//! This service wraps the token, registration and "who am I" endpoints.
//! Session state lives in [`crate::state::SessionCache`]; this type only
//! talks to the backend.

use tracing::{debug, info};
use crate::models::user::{LoginRequest, RegisterRequest, TokenPair, User};
use crate::services::api::ApiClient;
use crate::utils::errors::{OrbitViewError, Result};

pub const TOKEN_CREATE_PATH: &str = "/auth/jwt/create/";
pub const REGISTER_PATH: &str = "/auth/users/";
pub const CURRENT_USER_PATH: &str = "/api/users/me/";

/// Authentication service for the backend's auth endpoints
#[derive(Clone, Debug)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange username and password for an access token
    pub async fn obtain_token(&self, username: &str, password: &str) -> Result<TokenPair> {
        debug!(username = username, "Requesting access token");

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        match self.api.post::<_, TokenPair>(TOKEN_CREATE_PATH, &request, None).await {
            Ok(tokens) => {
                info!(username = username, "Access token issued");
                Ok(tokens)
            }
            Err(OrbitViewError::Api { status: 400 | 401, .. }) => Err(OrbitViewError::Authentication(
                "Username or password incorrect. Please try again".to_string(),
            )),
            Err(e) => Err(e),
        }
    }

    /// Create a new account
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        request.validate()?;
        debug!(username = %request.username, "Registering account");

        let user: User = self.api.post(REGISTER_PATH, request, None).await?;
        info!(user_id = user.id, username = %user.username, "Account registered");
        Ok(user)
    }

    /// Fetch the user the token belongs to
    pub async fn current_user(&self, token: &str) -> Result<User> {
        self.api.get(CURRENT_USER_PATH, &[], Some(token)).await
    }
}
