//! Authenticated layout shell shared by protected routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::ManagerHandle;
use crate::state::session::Session;
use crate::util::guard::LOGIN_PATH;

/// Portal chrome around protected content: brand, the signed-in
/// identity, and logout.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let manager = expect_context::<ManagerHandle>();
    let navigate = use_navigate();

    let identity = move || {
        session
            .get()
            .user
            .map(|user| user.username.unwrap_or(user.email))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        manager.get_value().logout_user();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-layout">
            <header class="dashboard-layout__header toolbar">
                <a class="toolbar__brand" href="/dashboard">"MedChain"</a>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">{identity}</span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            <main class="dashboard-layout__content">{children()}</main>
        </div>
    }
}
