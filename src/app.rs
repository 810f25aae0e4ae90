//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::profile_gate::ProfileGate;
use crate::components::protected_route::ProtectedRoute;
use crate::net::api::HttpApi;
use crate::net::types::Role;
use crate::pages::{
    complete_profile::CompleteProfilePage, dashboard::DashboardPage, landing::LandingPage,
    login::LoginPage, patient_details::PatientDetailsPage, records::MedicalRecordsPage,
    signup::SignupPage,
};
use crate::state::gate::GateState;
use crate::state::manager::SessionManager;
use crate::util::token::BrowserTokenStore;

/// The session manager wired to the real backend and browser storage.
pub type PortalManager = SessionManager<HttpApi, BrowserTokenStore>;

/// Context handle to the shared session manager. Local storage keeps the
/// non-`Send` manager off the threaded arena.
pub type ManagerHandle = StoredValue<Rc<PortalManager>, LocalStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session manager, mirrors its state into a context signal,
/// and sets up client-side routing with role-gated routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let manager = Rc::new(PortalManager::new(HttpApi, BrowserTokenStore));
    let session = RwSignal::new(manager.session());
    let gate = RwSignal::new(GateState::default());

    // The manager is the only writer; everything else observes the
    // signal.
    manager.observe(move |next| session.set(next.clone()));
    provide_context(session);
    provide_context(gate);
    let handle: ManagerHandle = StoredValue::new_local(manager.clone());
    provide_context(handle);

    // Resolve any persisted credential once at startup.
    {
        let booted = RwSignal::new(false);
        let manager = manager.clone();
        Effect::new(move || {
            if booted.get() {
                return;
            }
            booted.set(true);

            #[cfg(feature = "hydrate")]
            {
                let manager = manager.clone();
                leptos::task::spawn_local(async move { manager.bootstrap().await });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &manager;
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/medchain.css"/>
        <Title text="MedChain"/>

        <Router>
            <ProfileGate/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <DashboardPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("complete-profile")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <CompleteProfilePage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("medical-records")
                    view=|| {
                        view! {
                            <ProtectedRoute required_role=Role::Patient>
                                <MedicalRecordsPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("patients"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <ProtectedRoute required_role=Role::Doctor>
                                <PatientDetailsPage/>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
