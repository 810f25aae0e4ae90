//! The session manager: the only writer of session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Orchestrates login, signup, logout, boot-time restore, and background
//! refresh against the backend. All mutation happens on the
//! single-threaded UI event loop; the only hazard is out-of-order
//! completion of overlapping verification calls, resolved with an
//! attempt sequence number — the completion latest in sequence order
//! wins and stale completions are discarded.
//!
//! ERROR HANDLING
//! ==============
//! Boot-time verification failures clear the stored credential and drop
//! to an unauthenticated session silently. Refresh failures are logged
//! and swallowed, leaving the session untouched. The asymmetry is
//! deliberate: boot must never present stale identity as authenticated,
//! while a single failed background refresh must not eject an active
//! user.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::cell::{Cell, RefCell};

use crate::net::api::AuthApi;
use crate::net::error::SessionError;
use crate::net::types::{SignupData, UserIdentity};
use crate::state::session::Session;
use crate::util::token::{self, TokenStore};

type Observer = Box<dyn Fn(&Session)>;

/// Owns the session and serializes every transition.
pub struct SessionManager<A, S> {
    api: A,
    store: S,
    session: RefCell<Session>,
    issued: Cell<u64>,
    applied: Cell<u64>,
    observer: RefCell<Option<Observer>>,
}

impl<A: AuthApi, S: TokenStore> SessionManager<A, S> {
    /// Build the manager. The session starts loading iff a credential is
    /// persisted, pending [`Self::bootstrap`].
    pub fn new(api: A, store: S) -> Self {
        let session = if store.load().is_some() {
            Session::booting()
        } else {
            Session::default()
        };
        Self {
            api,
            store,
            session: RefCell::new(session),
            issued: Cell::new(0),
            applied: Cell::new(0),
            observer: RefCell::new(None),
        }
    }

    /// Register the observer notified after every mutation. Called once
    /// immediately with the current state.
    pub fn observe(&self, observer: impl Fn(&Session) + 'static) {
        observer(&self.session());
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Resolve any persisted credential into a session. No credential
    /// means no backend traffic; a rejected or expired one is discarded.
    pub async fn bootstrap(&self) {
        let _ = self.verify_stored(true).await;
    }

    /// Log in and establish an authenticated session.
    ///
    /// The login call yields only a credential; the identity (and role)
    /// must come from the verifier before the session counts as
    /// established.
    pub async fn login_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserIdentity, SessionError> {
        self.set_session(Session::booting());

        let credential = match self.api.login(email, password).await {
            Ok(credential) => credential,
            Err(err) => {
                self.fail(err.user_message());
                return Err(err);
            }
        };
        self.store.save(&credential);

        match self.verify_stored(true).await {
            Some(user) => Ok(user),
            None => {
                let err = SessionError::Auth("Authentication failed".to_owned());
                self.fail(err.user_message());
                Err(err)
            }
        }
    }

    /// Create an account. Does not establish a session; callers route to
    /// login afterward.
    pub async fn signup_user(&self, data: &SignupData) -> Result<UserIdentity, SessionError> {
        self.set_session(Session::booting());
        match self.api.signup(data).await {
            Ok(user) => {
                self.set_session(Session::default());
                Ok(user)
            }
            Err(err) => {
                self.fail(err.user_message());
                Err(err)
            }
        }
    }

    /// Clear the credential and reset the session. Purely client-side;
    /// any server-side invalidation is fire-and-forget elsewhere.
    pub fn logout_user(&self) {
        self.store.clear();
        self.set_session(Session::default());
    }

    /// Re-verify the stored credential in the background. Failures are
    /// logged and swallowed; a transient outage must not log out an
    /// active session.
    pub async fn refresh_user(&self) {
        let _ = self.verify_stored(false).await;
    }

    /// One verification attempt against the stored credential.
    ///
    /// Locally-expired tokens are discarded without a backend call.
    /// `strict` clears the store and resets the session on failure (boot
    /// and post-login paths); the lenient path leaves both untouched.
    async fn verify_stored(&self, strict: bool) -> Option<UserIdentity> {
        let Some(credential) = self.store.load() else {
            if strict {
                self.set_session(Session::default());
            }
            return None;
        };

        if token::is_expired(&credential) {
            self.store.clear();
            if strict {
                self.set_session(Session::default());
            }
            return None;
        }

        let seq = self.next_attempt();
        match self.api.verify(&credential).await {
            Ok(user) => self
                .complete(
                    seq,
                    Session {
                        user: Some(user.clone()),
                        loading: false,
                        error: None,
                    },
                )
                .then_some(user),
            Err(err) => {
                log::warn!("token verification failed: {err}");
                if strict && self.complete(seq, Session::default()) {
                    self.store.clear();
                }
                None
            }
        }
    }

    fn next_attempt(&self) -> u64 {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        seq
    }

    /// Apply a verification completion unless a later attempt already
    /// resolved. Returns whether it was applied.
    fn complete(&self, seq: u64, next: Session) -> bool {
        if seq <= self.applied.get() {
            log::warn!("discarding stale verification result (attempt {seq})");
            return false;
        }
        self.applied.set(seq);
        self.set_session(next);
        true
    }

    fn fail(&self, message: String) {
        self.set_session(Session {
            user: None,
            loading: false,
            error: Some(message),
        });
    }

    fn set_session(&self, next: Session) {
        *self.session.borrow_mut() = next;
        let snapshot = self.session();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&snapshot);
        }
    }
}
