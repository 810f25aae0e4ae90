//! Wire-schema DTOs for the portal backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's response models so serde round-trips
//! stay lossless; role strings are the backend's lowercase set. Extra
//! fields in responses (activation flags, token metadata) are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role; authorizes access to role-specific routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

impl Role {
    /// Wire string as the backend spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Doctor => "doctor",
            Self::Admin => "admin",
        }
    }

    /// Parse a wire/form string; unknown values are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "patient" => Some(Self::Patient),
            "doctor" => Some(Self::Doctor),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// A verified user identity as returned by `GET /auth/verify`.
///
/// Authorization decisions must use `role` from this verified source,
/// never a locally-decoded token claim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Backend account identifier.
    pub id: i64,
    /// Account email; a response without one is treated as rejected.
    pub email: String,
    /// Display name, if the account has one.
    pub username: Option<String>,
    /// Verified role.
    pub role: Role,
}

/// Payload for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupData {
    pub email: String,
    pub password: String,
    pub username: String,
    pub role: Role,
}

/// Fields collected by the patient onboarding form
/// (`POST /patients/profile`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileFields {
    pub first_name: String,
    pub last_name: String,
    /// ISO 8601 date string from the date input.
    pub date_of_birth: String,
}

/// Response shape of `GET /patients/profile/exists`.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ProfileStatus {
    pub exists: bool,
}

/// Response shape of `POST /auth/login`. Only the credential matters;
/// a 2xx without one is still a failed login.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: Option<String>,
}
