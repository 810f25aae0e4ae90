//! Role-aware route wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates the guard decision on every session change and
//! navigation: loading placeholder, redirect, or the route content
//! inside the authenticated layout.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::layout::DashboardLayout;
use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::guard::{self, GuardDecision};

#[component]
pub fn ProtectedRoute(
    #[prop(optional, into)] required_role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        {move || match guard::decide(&session.get(), required_role) {
            GuardDecision::Loading => view! {
                <div class="route-loading">
                    <p>"Loading..."</p>
                </div>
            }
            .into_any(),
            GuardDecision::RedirectToLogin => view! {
                <Redirect path=guard::LOGIN_PATH/>
            }
            .into_any(),
            GuardDecision::RedirectToDashboard => view! {
                <Redirect path=guard::DASHBOARD_PATH/>
            }
            .into_any(),
            GuardDecision::Allow => {
                let children = children.clone();
                view! { <DashboardLayout>{children()}</DashboardLayout> }.into_any()
            }
        }}
    }
}
