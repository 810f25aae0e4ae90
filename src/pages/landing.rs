//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"MedChain"</h1>
            <p>"Your medical records, one portal."</p>
            <div class="landing-page__actions">
                <a href="/login" class="btn btn--primary">"Sign In"</a>
                <a href="/signup" class="btn">"Create Account"</a>
            </div>
        </div>
    }
}
