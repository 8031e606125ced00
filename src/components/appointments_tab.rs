//! Appointments Tab
//!
//! Full appointment list with long-form dates and action buttons.

use leptos::prelude::*;

use crate::format::{format_long_date, format_time};
use crate::models::Appointment;

#[component]
pub fn AppointmentsTab(appointments: ReadSignal<Vec<Appointment>>) -> impl IntoView {
    view! {
        <div class="panel">
            <h2>"Appointments"</h2>
            <div class="appointment-list">
                <For
                    each=move || appointments.get()
                    key=|apt| apt.id
                    children=move |apt| {
                        view! {
                            <div class="appointment-row">
                                <div>
                                    <p class="name">{apt.patient_name.clone()}</p>
                                    <p class="detail">
                                        {format!(
                                            "{} at {}",
                                            format_long_date(&apt.date),
                                            format_time(&apt.date),
                                        )}
                                    </p>
                                    <p class="detail">{apt.kind.clone()}</p>
                                </div>
                                <div class="row-actions">
                                    <button class="primary">"Start"</button>
                                    <button class="secondary">"Reschedule"</button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
