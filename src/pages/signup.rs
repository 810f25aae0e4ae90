//! Signup page for new patient and doctor accounts.
//!
//! Creating an account never establishes a session; a successful signup
//! routes back to the login page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::ManagerHandle;
use crate::net::types::{Role, SignupData};
use crate::state::session::Session;
use crate::util::guard::DASHBOARD_PATH;
#[cfg(feature = "hydrate")]
use crate::util::guard::LOGIN_PATH;

fn validate_signup_input(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
    role: &str,
) -> Result<SignupData, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    let Some(role) = Role::parse(role) else {
        return Err("Choose a valid role.");
    };
    Ok(SignupData {
        email: email.to_owned(),
        password: password.to_owned(),
        username: username.to_owned(),
        role,
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let manager = expect_context::<ManagerHandle>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new("patient".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: straight to the dashboard.
    let navigate_authed = navigate.clone();
    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate_authed(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let data = match validate_signup_input(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
            &role.get(),
        ) {
            Ok(data) => data,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let manager = manager.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match manager.signup_user(&data).await {
                    Ok(_) => navigate(LOGIN_PATH, NavigateOptions::default()),
                    Err(err) => {
                        info.set(err.user_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&manager, &navigate, data);
            busy.set(false);
        }
    };

    view! {
        <div class="signup-page">
            <div class="login-card">
                <h1>"Create Account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <label class="login-label">
                        "I am a"
                        <select
                            class="login-input"
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            <option value="patient">"Patient"</option>
                            <option value="doctor">"Doctor"</option>
                        </select>
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
