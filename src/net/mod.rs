//! Networking modules for the portal backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `error` defines the failure taxonomy, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
