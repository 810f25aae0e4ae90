//! Session state for the current portal user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one `Session` lives in a context signal; only the session
//! manager writes it. Route guards, the profile gate, and pages are
//! read-only observers.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, UserIdentity};

/// Lifecycle phase derived from the session fields.
///
/// `Authenticated` is only ever reported with a user present, so the
/// "authenticated implies identity" invariant holds by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Unauthenticated,
    Loading,
    Authenticated,
    Error,
}

/// Authentication state: the verified user, the in-flight flag, and the
/// last user-facing error message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserIdentity>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Session {
    /// Session that is still resolving an attempt.
    pub fn booting() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.loading {
            SessionStatus::Loading
        } else if self.user.is_some() {
            SessionStatus::Authenticated
        } else if self.error.is_some() {
            SessionStatus::Error
        } else {
            SessionStatus::Unauthenticated
        }
    }

    /// Whether a verified user is present and no attempt is in flight.
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    /// Role of the current user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}
