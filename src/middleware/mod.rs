//! Middleware module
//!
//! Cross-cutting checks applied before a page handler runs.

pub mod auth;

pub use auth::{guard_route, is_protected, RouteDecision};
