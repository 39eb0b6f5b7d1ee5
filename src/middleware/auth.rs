//! Route guard
//!
//! Decides whether a page may be shown given the presence of a session
//! token. Profile pages need a token; the login and register pages are
//! skipped once a token exists.

use tracing::debug;

pub const HOME: &str = "/";
pub const DISCOVERY: &str = "/discover";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const PROFILE: &str = "/profile";
pub const TIMELINE: &str = "/profile/timeline";

/// Path prefixes that require a session token
pub const PROTECTED_PATHS: &[&str] = &[
    PROFILE,
    "/profile/builder",
    TIMELINE,
    "/profile/projects",
    "/profile/skills",
    "/profile/achievements",
];

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    /// Sign-in needed; `from` is where to return afterwards
    RedirectToLogin { from: String },
    RedirectToProfile,
}

impl RouteDecision {
    /// Login page location carrying the original path, e.g. `/login?from=%2Fprofile`
    pub fn location(&self) -> Option<String> {
        match self {
            RouteDecision::Allow => None,
            RouteDecision::RedirectToLogin { from } => {
                let mut url = url::Url::parse("http://orbitview.local").ok()?.join(LOGIN).ok()?;
                url.query_pairs_mut().append_pair("from", from);
                Some(format!("{}?{}", url.path(), url.query().unwrap_or_default()))
            }
            RouteDecision::RedirectToProfile => Some(PROFILE.to_string()),
        }
    }
}

pub fn is_protected(path: &str) -> bool {
    PROTECTED_PATHS.iter().any(|prefix| path.starts_with(prefix))
}

/// Check `path` against the current token
pub fn guard_route(path: &str, token: Option<&str>) -> RouteDecision {
    let has_token = token.map_or(false, |t| !t.is_empty());

    let decision = if is_protected(path) && !has_token {
        RouteDecision::RedirectToLogin {
            from: path.to_string(),
        }
    } else if has_token && (path == LOGIN || path == REGISTER) {
        RouteDecision::RedirectToProfile
    } else {
        RouteDecision::Allow
    };

    debug!(path = path, has_token = has_token, decision = ?decision, "Route guard");
    decision
}
