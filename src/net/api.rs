//! REST calls to the portal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Responses are mapped into the [`SessionError`] taxonomy so callers can
//! tell a backend rejection (inline message) from a rejected token
//! (forced logout) from a transport failure (retryable). Any `401`,
//! regardless of which call produced it, clears the stored credential and
//! forces the login route.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::SessionError;
use crate::net::types::{ProfileFields, SignupData, UserIdentity};

#[cfg(feature = "hydrate")]
use crate::net::types::{LoginResponse, ProfileStatus};
#[cfg(feature = "hydrate")]
use crate::util::guard::LOGIN_PATH;
#[cfg(feature = "hydrate")]
use crate::util::token::{BrowserTokenStore, TokenStore};

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_FALLBACK: &str = "Signup failed. Please try again.";
#[cfg(feature = "hydrate")]
const VERIFY_FALLBACK: &str = "Session verification failed";
#[cfg(any(test, feature = "hydrate"))]
const PROFILE_FALLBACK: &str = "Failed to create profile. Please try again.";
#[cfg(not(feature = "hydrate"))]
const NOT_BROWSER: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Backend base URL, fixed at build time via `MEDCHAIN_API_URL`.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("MEDCHAIN_API_URL").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract the backend's `detail`/`message` error text, else `fallback`.
/// The backend nests `detail` as either a string or an object carrying a
/// `message` field.
#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &serde_json::Value, fallback: &str) -> String {
    if let Some(detail) = body.get("detail") {
        if let Some(text) = detail.as_str() {
            return text.to_owned();
        }
        if let Some(text) = detail.get("message").and_then(|m| m.as_str()) {
            return text.to_owned();
        }
    }
    if let Some(text) = body.get("message").and_then(|m| m.as_str()) {
        return text.to_owned();
    }
    fallback.to_owned()
}

/// Parse a user identity from either the bare shape or a `{"user": ...}`
/// wrapper; `None` when a required field is missing.
#[cfg(any(test, feature = "hydrate"))]
fn parse_user_payload(body: &serde_json::Value) -> Option<UserIdentity> {
    let inner = body.get("user").unwrap_or(body);
    serde_json::from_value(inner.clone()).ok()
}

/// Global 401 handling: drop the stored credential and force the login
/// route, regardless of which call tripped it.
#[cfg(feature = "hydrate")]
fn handle_unauthorized() {
    BrowserTokenStore.clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}

#[cfg(feature = "hydrate")]
fn required_token() -> Result<String, SessionError> {
    BrowserTokenStore
        .load()
        .ok_or_else(|| SessionError::Verification("no stored credential".to_owned()))
}

/// Backend auth endpoints consumed by the session manager.
///
/// Implementations run on the single-threaded browser event loop, so the
/// returned futures are deliberately not `Send`.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for a bearer token. The token alone does not
    /// establish a session.
    async fn login(&self, email: &str, password: &str) -> Result<String, SessionError>;

    /// Ask the backend to validate the token and return the canonical
    /// identity, including the authoritative role.
    async fn verify(&self, token: &str) -> Result<UserIdentity, SessionError>;

    /// Create an account. Callers route to login afterward.
    async fn signup(&self, data: &SignupData) -> Result<UserIdentity, SessionError>;
}

/// [`AuthApi`] over the real backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl AuthApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<String, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let resp = gloo_net::http::Request::post(&endpoint("/auth/login"))
                .json(&payload)
                .map_err(|e| SessionError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| SessionError::Network(e.to_string()))?;
            if !resp.ok() {
                let body = resp
                    .json::<serde_json::Value>()
                    .await
                    .unwrap_or(serde_json::Value::Null);
                return Err(SessionError::Auth(error_detail(&body, LOGIN_FALLBACK)));
            }
            let body: LoginResponse = resp
                .json()
                .await
                .map_err(|e| SessionError::Network(e.to_string()))?;
            body.access_token
                .ok_or_else(|| SessionError::Auth("Authentication failed: no token received".to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(SessionError::Network(NOT_BROWSER.to_owned()))
        }
    }

    async fn verify(&self, token: &str) -> Result<UserIdentity, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&endpoint("/auth/verify"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| SessionError::Network(e.to_string()))?;
            if !resp.ok() {
                if resp.status() == 401 {
                    handle_unauthorized();
                }
                let body = resp
                    .json::<serde_json::Value>()
                    .await
                    .unwrap_or(serde_json::Value::Null);
                return Err(SessionError::Verification(error_detail(&body, VERIFY_FALLBACK)));
            }
            let body = resp
                .json::<serde_json::Value>()
                .await
                .map_err(|e| SessionError::Network(e.to_string()))?;
            parse_user_payload(&body)
                .ok_or_else(|| SessionError::Verification("Invalid user data received".to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(SessionError::Network(NOT_BROWSER.to_owned()))
        }
    }

    async fn signup(&self, data: &SignupData) -> Result<UserIdentity, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&endpoint("/auth/signup"))
                .json(data)
                .map_err(|e| SessionError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| SessionError::Network(e.to_string()))?;
            if !resp.ok() {
                let body = resp
                    .json::<serde_json::Value>()
                    .await
                    .unwrap_or(serde_json::Value::Null);
                return Err(SessionError::Auth(error_detail(&body, SIGNUP_FALLBACK)));
            }
            let body = resp
                .json::<serde_json::Value>()
                .await
                .map_err(|e| SessionError::Network(e.to_string()))?;
            parse_user_payload(&body)
                .ok_or_else(|| SessionError::Auth("Invalid user data received".to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = data;
            Err(SessionError::Network(NOT_BROWSER.to_owned()))
        }
    }
}

/// Whether the signed-in patient has completed onboarding
/// (`GET /patients/profile/exists`).
pub async fn check_profile_exists() -> Result<bool, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let token = required_token()?;
        let resp = gloo_net::http::Request::get(&endpoint("/patients/profile/exists"))
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;
        if resp.status() == 401 {
            handle_unauthorized();
        }
        if !resp.ok() {
            return Err(SessionError::Network(format!(
                "profile check failed: {}",
                resp.status()
            )));
        }
        let status: ProfileStatus = resp
            .json()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;
        Ok(status.exists)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SessionError::Network(NOT_BROWSER.to_owned()))
    }
}

/// Create the patient profile from the onboarding form
/// (`POST /patients/profile`).
pub async fn create_patient_profile(fields: &ProfileFields) -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let token = required_token()?;
        let resp = gloo_net::http::Request::post(&endpoint("/patients/profile"))
            .header("Authorization", &bearer(&token))
            .json(fields)
            .map_err(|e| SessionError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;
        if resp.status() == 401 {
            handle_unauthorized();
        }
        if !resp.ok() {
            let body = resp
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            return Err(SessionError::Auth(error_detail(&body, PROFILE_FALLBACK)));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fields;
        Err(SessionError::Network(NOT_BROWSER.to_owned()))
    }
}
