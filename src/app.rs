//! Arogya Saathi Portal App
//!
//! Root component wiring the route table: role/auth selection at `/`,
//! role dashboards under `/dashboard/:role`.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::components::{AuthPage, DoctorDashboard, PatientDashboard};
use crate::models::Role;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route path=path!("/") view=AuthPage />
                <Route path=path!("/dashboard/:role") view=DashboardPage />
            </Routes>
        </Router>
    }
}

/// Resolves the `:role` route param to the matching dashboard.
/// Unknown segments bounce back to role selection.
#[component]
fn DashboardPage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let segment = params.read().get("role").unwrap_or_default();
        match Role::from_segment(&segment) {
            Some(Role::Doctor) => view! { <DoctorDashboard /> }.into_any(),
            Some(Role::Patient) => view! { <PatientDashboard /> }.into_any(),
            None => view! { <Redirect path="/" /> }.into_any(),
        }
    }
}
