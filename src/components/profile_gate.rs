//! Post-login onboarding redirect for patients.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside the router. Whenever the session becomes an
//! authenticated patient without a confirmed profile, it asks the
//! backend whether the profile exists and redirects into onboarding if
//! not. Availability over completeness: a failed check is logged and
//! never blocks navigation.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::gate::{self, GateState};
use crate::state::session::Session;

/// Invisible component running the profile-completeness check.
#[component]
pub fn ProfileGate() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let gate = expect_context::<RwSignal<GateState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        if !gate::should_check(&session.get(), gate.get()) {
            return;
        }
        let current_path = location.pathname.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::check_profile_exists().await {
                    Ok(true) => gate.update(|g| g.confirmed = true),
                    Ok(false) => {
                        if gate::needs_onboarding(false, &current_path) {
                            navigate(gate::ONBOARDING_PATH, NavigateOptions::default());
                        }
                    }
                    Err(err) => log::warn!("profile check failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &current_path);
        }
    });
}
