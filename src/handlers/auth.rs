//! Login, registration and session handlers

use tracing::{debug, info};
use crate::middleware::{auth as routes, guard_route, RouteDecision};
use crate::models::user::RegisterRequest;
use crate::services::ServiceFactory;
use crate::state::SessionCache;
use crate::utils::errors::Result;
use crate::utils::logging::log_auth_event;

fn already_signed_in(session: &SessionCache) -> String {
    let name = session
        .user()
        .map(|u| u.display_name())
        .unwrap_or_else(|| "the current user".to_string());
    format!("Already signed in as {}. Run `orbitview logout` to switch accounts.", name)
}

/// Sign in with username and password and persist the session
pub async fn handle_login(
    services: &ServiceFactory,
    session: &mut SessionCache,
    username: &str,
    password: &str,
) -> Result<String> {
    if guard_route(routes::LOGIN, session.token()) == RouteDecision::RedirectToProfile {
        return Ok(already_signed_in(session));
    }

    debug!(username = username, "Processing login");
    let tokens = services.auth_service.obtain_token(username, password).await?;
    let user = session.login(&tokens.access).await?;

    let name = if user.first_name.is_empty() {
        user.username.clone()
    } else {
        user.first_name.clone()
    };
    Ok(format!("Login successful. Welcome back, {}!", name))
}

/// Create an account; the user signs in separately afterwards
pub async fn handle_register(
    services: &ServiceFactory,
    session: &SessionCache,
    request: &RegisterRequest,
) -> Result<String> {
    if guard_route(routes::REGISTER, session.token()) == RouteDecision::RedirectToProfile {
        return Ok(already_signed_in(session));
    }

    let user = services.auth_service.register(request).await?;
    log_auth_event("register", Some(&user.username), None);
    Ok(format!(
        "Account created for {}. Sign in with `orbitview login --username {}`.",
        user.display_name(),
        user.username
    ))
}

pub fn handle_logout(session: &mut SessionCache) -> Result<String> {
    if !session.is_authenticated() {
        session.logout()?;
        return Ok("Not signed in.".to_string());
    }
    session.logout()?;
    info!("Signed out");
    Ok("Signed out.".to_string())
}

pub fn handle_whoami(session: &SessionCache) -> String {
    match session.user() {
        Some(user) => {
            let mut lines = vec![format!("{} (@{})", user.display_name(), user.username)];
            if !user.email.is_empty() {
                lines.push(user.email.clone());
            }
            if let Some(website) = user.website.as_deref().filter(|w| !w.is_empty()) {
                lines.push(website.to_string());
            }
            lines.join("\n")
        }
        None => match &session.state().error {
            Some(error) => format!("Not signed in ({}).", error),
            None => "Not signed in.".to_string(),
        },
    }
}
