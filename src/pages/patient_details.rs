//! Doctor-facing patient detail route.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn PatientDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let patient_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div class="patient-details-page">
            <h2>"Patient " {patient_id}</h2>
            <p>"Clinical details will appear here."</p>
        </div>
    }
}
