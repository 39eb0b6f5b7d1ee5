//! Session cache
//!
//! Holds the current authentication state and mirrors the access token and
//! a copy of the user record into [`SessionStorage`]. Any failed validation
//! clears both the in-memory state and the persisted entry.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::models::user::User;
use crate::services::auth::AuthService;
use crate::utils::errors::{OrbitViewError, Result};
use crate::utils::logging::log_auth_event;
use super::storage::SessionStorage;

const AUTHENTICATION_FAILED: &str = "Authentication failed";

/// Snapshot of authentication state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// What gets written to storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

impl PersistedSession {
    /// Older clients stored the bare token string under the same key
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match serde_json::from_str::<PersistedSession>(trimmed) {
            Ok(session) if !session.token.is_empty() => Some(session),
            Ok(_) => None,
            Err(_) if !trimmed.starts_with('{') => Some(Self {
                token: trimmed.to_string(),
                user: None,
            }),
            Err(_) => None,
        }
    }
}

/// Authentication state holder backed by persistent storage
pub struct SessionCache {
    auth: AuthService,
    storage: Arc<dyn SessionStorage>,
    storage_key: String,
    state: AuthState,
}

impl SessionCache {
    pub fn new(auth: AuthService, storage: Arc<dyn SessionStorage>, storage_key: impl Into<String>) -> Self {
        Self {
            auth,
            storage,
            storage_key: storage_key.into(),
            state: AuthState::default(),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    /// Token currently held in storage, without contacting the backend
    pub fn stored_session(&self) -> Result<Option<PersistedSession>> {
        Ok(self
            .storage
            .get_item(&self.storage_key)?
            .as_deref()
            .and_then(PersistedSession::parse))
    }

    /// Validate `token` against the backend and persist it on success.
    ///
    /// On failure the state is cleared, the persisted entry is removed and
    /// the validation error is returned.
    pub async fn login(&mut self, token: &str) -> Result<&User> {
        self.state.is_loading = true;
        self.state.error = None;

        match self.auth.current_user(token).await {
            Ok(user) => {
                let persisted = PersistedSession {
                    token: token.to_string(),
                    user: Some(user.clone()),
                };
                let saved = serde_json::to_string(&persisted)
                    .map_err(OrbitViewError::from)
                    .and_then(|raw| self.storage.set_item(&self.storage_key, &raw));
                if let Err(e) = saved {
                    warn!(error = %e, "Could not persist session");
                    self.state = AuthState {
                        error: Some(e.to_string()),
                        ..AuthState::default()
                    };
                    return Err(e);
                }

                log_auth_event("login", Some(&user.username), None);
                self.state = AuthState {
                    is_authenticated: true,
                    user: Some(user),
                    token: Some(token.to_string()),
                    is_loading: false,
                    error: None,
                };
                self.state
                    .user
                    .as_ref()
                    .ok_or_else(|| OrbitViewError::Authentication(AUTHENTICATION_FAILED.to_string()))
            }
            Err(e) => {
                let message = failure_message(&e);
                warn!(error = %e, "Token validation failed during login");
                self.fail(message.clone())?;
                Err(OrbitViewError::Authentication(message))
            }
        }
    }

    /// Revalidate the persisted token. Returns whether the session is usable.
    ///
    /// With nothing stored the state is reset without a network call. An
    /// unreadable entry is removed the same way. Any revalidation failure,
    /// including transport errors, clears everything.
    pub async fn check_auth(&mut self) -> Result<bool> {
        let raw = self.storage.get_item(&self.storage_key)?;
        let stored = match raw.as_deref().map(PersistedSession::parse) {
            Some(Some(stored)) => stored,
            Some(None) => {
                warn!("Persisted session is unreadable, removing it");
                self.state = AuthState::default();
                self.storage.remove_item(&self.storage_key)?;
                return Ok(false);
            }
            None => {
                debug!("No persisted session");
                self.state = AuthState::default();
                return Ok(false);
            }
        };

        self.state.is_loading = true;
        self.state.error = None;

        match self.auth.current_user(&stored.token).await {
            Ok(user) => {
                debug!(username = %user.username, "Persisted session revalidated");
                self.state = AuthState {
                    is_authenticated: true,
                    user: Some(user),
                    token: Some(stored.token),
                    is_loading: false,
                    error: None,
                };
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "Persisted session rejected, clearing credentials");
                log_auth_event("session_expired", stored.user.as_ref().map(|u| u.username.as_str()), Some(&e.to_string()));
                self.fail(failure_message(&e))?;
                Ok(false)
            }
        }
    }

    /// Startup hook; same as [`SessionCache::check_auth`]
    pub async fn initialize(&mut self) -> Result<bool> {
        self.check_auth().await
    }

    /// Clear state and persisted storage
    pub fn logout(&mut self) -> Result<()> {
        let username = self.state.user.as_ref().map(|u| u.username.clone());
        self.storage.remove_item(&self.storage_key)?;
        self.state = AuthState::default();
        log_auth_event("logout", username.as_deref(), None);
        Ok(())
    }

    fn fail(&mut self, message: String) -> Result<()> {
        self.state = AuthState {
            error: Some(message),
            ..AuthState::default()
        };
        self.storage.remove_item(&self.storage_key)
    }
}

fn failure_message(error: &OrbitViewError) -> String {
    match error {
        OrbitViewError::Api { status: 401 | 403, .. } => AUTHENTICATION_FAILED.to_string(),
        other => other.to_string(),
    }
}
