//! Route guarding decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision logic shared by every protected route; re-evaluated on
//! each navigation and session change. An under-privileged user is
//! already authenticated, so role mismatches land on the dashboard,
//! never on the login screen.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::Session;

/// Default landing route for authenticated users.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Route unauthenticated users are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of evaluating a protected route against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving; render a placeholder, no redirect.
    Loading,
    /// No authenticated user.
    RedirectToLogin,
    /// Authenticated, but missing the required role.
    RedirectToDashboard,
    /// Render the route content.
    Allow,
}

/// Evaluate a route's role requirement against the session.
pub fn decide(session: &Session, required_role: Option<Role>) -> GuardDecision {
    if session.loading {
        return GuardDecision::Loading;
    }
    let Some(user) = &session.user else {
        return GuardDecision::RedirectToLogin;
    };
    match required_role {
        Some(role) if user.role != role => GuardDecision::RedirectToDashboard,
        _ => GuardDecision::Allow,
    }
}
