//! Prescriptions Tab

use leptos::prelude::*;

#[component]
pub fn PrescriptionsTab() -> impl IntoView {
    view! {
        <div class="panel">
            <h2>"Prescriptions"</h2>
            <button class="primary wide">"Create New Prescription"</button>
            <div class="record-card">
                <h3>"Recent Prescriptions"</h3>
                <div class="prescription-row">
                    <span>"John Smith - March 15, 2024"</span>
                    <button class="link-btn">"View"</button>
                </div>
            </div>
        </div>
    }
}
