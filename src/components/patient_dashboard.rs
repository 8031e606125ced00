//! Patient Dashboard
//!
//! Lean patient view: upcoming consultations over fixed data and a video
//! consult surface. No overlay panels, so no dismissal plumbing here.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{DashboardCard, VideoConsult};
use crate::format::{format_long_date, format_time};
use crate::models::Role;
use crate::sample_data;

#[component]
pub fn PatientDashboard() -> impl IntoView {
    let navigate = use_navigate();
    let (visits, _) = signal(sample_data::patient_visits());

    let logout = move |_| {
        navigate("/", Default::default());
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div class="header-left">
                    <h1>"Patient Dashboard"</h1>
                </div>
                <div class="header-right">
                    <button class="icon-btn" title="Logout" on:click=logout>
                        "⏻"
                    </button>
                </div>
            </header>

            <div class="dashboard-body">
                <main class="dashboard-content">
                    <div class="card-grid">
                        <DashboardCard title="Upcoming Consultations" icon="📅">
                            <div class="card-list">
                                <For
                                    each=move || visits.get()
                                    key=|visit| visit.id
                                    children=move |visit| {
                                        view! {
                                            <div class="appointment-brief">
                                                <p class="name">{visit.doctor_name.clone()}</p>
                                                <p class="detail">
                                                    {format!(
                                                        "{} at {} - {}",
                                                        format_long_date(&visit.date),
                                                        format_time(&visit.date),
                                                        visit.kind,
                                                    )}
                                                </p>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </DashboardCard>
                    </div>

                    <VideoConsult role=Role::Patient />
                </main>
            </div>
        </div>
    }
}
