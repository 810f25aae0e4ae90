//! Failure taxonomy for session and backend operations.
//!
//! ERROR HANDLING
//! ==============
//! `Auth` carries a user-facing message for inline display next to the
//! login/signup forms. `Verification` marks a rejected token or a
//! malformed identity payload and drives silent logout on the boot and
//! interceptor paths. `Network` marks transport failures reached before a
//! backend verdict: fatal for login/signup, swallowed on refresh and
//! profile-gate paths.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Errors produced by the auth API and session manager.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Backend rejected the credentials or request.
    #[error("{0}")]
    Auth(String),
    /// Token rejected by the verifier, or the identity payload was
    /// missing a required field.
    #[error("session verification failed: {0}")]
    Verification(String),
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),
}

impl SessionError {
    /// Message suitable for inline display in a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(msg) => msg.clone(),
            Self::Verification(_) => "Session verification failed".to_owned(),
            Self::Network(_) => "Network error. Please try again.".to_owned(),
        }
    }
}
