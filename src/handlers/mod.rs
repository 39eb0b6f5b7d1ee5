//! Page handlers
//!
//! Each handler fetches what its page needs, applies client-side filtering
//! and returns the rendered page as a string.

pub mod auth;
pub mod discover;
pub mod home;
pub mod profile;
pub mod render;

use tracing::warn;
use crate::middleware::{guard_route, RouteDecision};
use crate::state::SessionCache;
use crate::utils::errors::{OrbitViewError, Result};

/// Token for a protected page, or `NotAuthenticated` when signed out
pub fn require_session<'a>(session: &'a SessionCache, path: &str) -> Result<&'a str> {
    if let RouteDecision::RedirectToLogin { from } = guard_route(path, session.token()) {
        warn!(path = %from, "Protected page requested without a session");
        return Err(OrbitViewError::NotAuthenticated);
    }
    session.token().ok_or(OrbitViewError::NotAuthenticated)
}

/// A rejected token ends the session; other errors pass through
pub fn expire_on_unauthorized(session: &mut SessionCache, error: OrbitViewError) -> OrbitViewError {
    if !error.is_unauthorized() {
        return error;
    }
    if let Err(e) = session.logout() {
        warn!(error = %e, "Failed to clear rejected session");
    }
    OrbitViewError::NotAuthenticated
}
