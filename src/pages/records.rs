//! Patient medical-records route.
//!
//! Record listing and upload live behind backend endpoints that are out
//! of scope for the session lifecycle; this page only anchors the
//! patient-gated route.

use leptos::prelude::*;

#[component]
pub fn MedicalRecordsPage() -> impl IntoView {
    view! {
        <div class="records-page">
            <h2>"Medical Records"</h2>
            <p>"Your uploaded records will appear here."</p>
        </div>
    }
}
