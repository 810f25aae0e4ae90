//! Credential storage and local expiry inspection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token lives in one durable browser key. Storage is purely
//! mechanical. The inspector only reads the unsigned `exp` claim; it can
//! never vouch for authenticity, so identity and role always come from
//! the verifier.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths safely
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::cell::RefCell;
use std::rc::Rc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "medchain_token";

/// Durable storage for the bearer credential.
///
/// Alternate backing stores can be substituted without touching the
/// session state machine.
pub trait TokenStore {
    fn save(&self, token: &str);
    fn load(&self) -> Option<String>;
    fn clear(&self);
}

impl<T: TokenStore> TokenStore for Rc<T> {
    fn save(&self, token: &str) {
        (**self).save(token);
    }

    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// localStorage-backed store scoped to the browser origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, token);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let storage = window.local_storage().ok().flatten()?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(STORAGE_KEY);
                }
            }
        }
    }
}

/// In-memory store for tests and non-browser contexts.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_owned())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Expiry claim (seconds since epoch) from the token's claims segment.
///
/// Returns `None` for anything that is not a well-formed JWT carrying a
/// numeric `exp`.
pub fn claims_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    claims.exp
}

/// Whether the token is expired at `now_secs`. Fails safe: malformed
/// input and missing claims read as expired. Never panics.
pub fn is_expired_at(token: &str, now_secs: i64) -> bool {
    match claims_expiry(token) {
        Some(exp) => exp < now_secs,
        None => true,
    }
}

/// Whether the token is expired right now.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, now_secs())
}

#[allow(clippy::cast_possible_truncation)]
fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs() as i64)
    }
}
