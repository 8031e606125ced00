//! Overview Tab
//!
//! Three-card summary: today's appointments, quick stats, and earnings.

use leptos::prelude::*;

use crate::components::{DashboardCard, StatRow};
use crate::format::format_time;
use crate::models::Appointment;

#[component]
pub fn OverviewTab(appointments: ReadSignal<Vec<Appointment>>) -> impl IntoView {
    view! {
        <div class="card-grid">
            <DashboardCard title="Today's Appointments" icon="📅">
                <div class="card-list">
                    <For
                        each=move || appointments.get()
                        key=|apt| apt.id
                        children=move |apt| {
                            view! {
                                <div class="appointment-brief">
                                    <p class="name">{apt.patient_name.clone()}</p>
                                    <p class="detail">
                                        {format!("{} - {}", format_time(&apt.date), apt.kind)}
                                    </p>
                                    <button class="primary small">"Start Consultation"</button>
                                </div>
                            }
                        }
                    />
                </div>
            </DashboardCard>

            <DashboardCard title="Quick Stats" icon="🕐">
                <div class="stat-rows">
                    <StatRow label="Total Patients Today" value="8" />
                    <StatRow label="Completed Consultations" value="5" />
                    <StatRow label="Pending Consultations" value="3" />
                </div>
            </DashboardCard>

            <DashboardCard title="Earnings Overview" icon="💳">
                <div class="stat-rows">
                    <StatRow label="Today's Earnings" value="$450" />
                    <StatRow label="This Week" value="$2,450" />
                    <StatRow label="This Month" value="$8,920" />
                </div>
            </DashboardCard>
        </div>
    }
}
