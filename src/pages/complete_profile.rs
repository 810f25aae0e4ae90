//! Patient onboarding form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Target of the profile-completeness gate. A successful submission
//! marks the gate confirmed for the rest of the session and lands on
//! the dashboard.

#[cfg(test)]
#[path = "complete_profile_test.rs"]
mod complete_profile_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::ProfileFields;
use crate::state::gate::GateState;
#[cfg(feature = "hydrate")]
use crate::util::guard::DASHBOARD_PATH;

fn validate_profile_input(
    first_name: &str,
    last_name: &str,
    date_of_birth: &str,
) -> Result<ProfileFields, &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    if first_name.chars().count() < 2 || last_name.chars().count() < 2 {
        return Err("Names need at least 2 characters.");
    }
    if date_of_birth.is_empty() {
        return Err("Date of birth is required.");
    }
    Ok(ProfileFields {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        date_of_birth: date_of_birth.to_owned(),
    })
}

#[component]
pub fn CompleteProfilePage() -> impl IntoView {
    let gate = expect_context::<RwSignal<GateState>>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let fields = match validate_profile_input(
            &first_name.get(),
            &last_name.get(),
            &date_of_birth.get(),
        ) {
            Ok(fields) => fields,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::create_patient_profile(&fields).await {
                    Ok(()) => {
                        gate.update(|g| g.confirmed = true);
                        navigate(DASHBOARD_PATH, NavigateOptions::default());
                    }
                    Err(err) => {
                        info.set(err.user_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &gate, fields);
            busy.set(false);
        }
    };

    view! {
        <div class="complete-profile-page">
            <div class="login-card">
                <h2>"Complete Your Profile"</h2>
                <p class="login-card__subtitle">
                    "Please provide your basic information to continue"
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="date"
                        prop:value=move || date_of_birth.get()
                        on:input=move |ev| date_of_birth.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Save Profile"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
