//! Role-switched dashboard landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the default authenticated landing route. It silently
//! refreshes the verified identity once on entry and renders the
//! role-appropriate panel.

use leptos::prelude::*;

use crate::app::ManagerHandle;
use crate::net::types::Role;
use crate::state::session::Session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let manager = expect_context::<ManagerHandle>();

    // One silent identity refresh per visit; failures never eject the
    // user.
    let refreshed = RwSignal::new(false);
    Effect::new(move || {
        if refreshed.get() {
            return;
        }
        refreshed.set(true);

        #[cfg(feature = "hydrate")]
        {
            let manager = manager.get_value();
            leptos::task::spawn_local(async move { manager.refresh_user().await });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &manager;
        }
    });

    view! {
        <div class="dashboard-page">
            {move || match session.get().role() {
                Some(Role::Doctor) => view! { <DoctorPanel/> }.into_any(),
                Some(Role::Admin) => view! {
                    <p class="dashboard-page__note">"Administration console."</p>
                }
                .into_any(),
                _ => view! { <PatientPanel/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PatientPanel() -> impl IntoView {
    view! {
        <section class="dashboard-panel">
            <h2>"Your Health"</h2>
            <ul class="dashboard-panel__links">
                <li>
                    <a href="/medical-records">"Medical Records"</a>
                </li>
            </ul>
        </section>
    }
}

#[component]
fn DoctorPanel() -> impl IntoView {
    view! {
        <section class="dashboard-panel">
            <h2>"Your Patients"</h2>
            <p>"Select a patient to review their records."</p>
        </section>
    }
}
