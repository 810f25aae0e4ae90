//! # medchain-client
//!
//! Leptos + WASM front-end for the MedChain patient/doctor portal.
//! Replaces the React client with a Rust-native UI layer.
//!
//! This crate contains pages, components, the session state machine, and
//! the HTTP layer for the external portal backend. The session lifecycle
//! (token storage, verification, role-gated routing, patient onboarding)
//! is the one subsystem with real structure; the page bodies are thin
//! shells over backend calls.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
