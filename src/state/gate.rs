//! Patient onboarding gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! After a patient authenticates, the portal requires a completed
//! profile before any other protected route. Doctors and admins skip
//! the check entirely. A profile-check outage never blocks navigation.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::net::types::Role;
use crate::state::session::Session;

/// Onboarding form route.
pub const ONBOARDING_PATH: &str = "/complete-profile";

/// Per-session memory of the gate outcome.
///
/// A confirmed profile is cached for the rest of the session, so a
/// completed profile is never re-redirected into onboarding. An
/// unconfirmed one is re-checked on later authenticated transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateState {
    pub confirmed: bool,
}

/// Whether a profile check should run for the current session.
pub fn should_check(session: &Session, gate: GateState) -> bool {
    !gate.confirmed && session.is_authenticated() && session.role() == Some(Role::Patient)
}

/// Whether a negative check result redirects into onboarding from
/// `current_path`. Already being on the form never loops.
pub fn needs_onboarding(exists: bool, current_path: &str) -> bool {
    !exists && current_path != ONBOARDING_PATH
}
