//! Medical Records Tab

use leptos::prelude::*;

#[component]
pub fn RecordsTab() -> impl IntoView {
    view! {
        <div class="panel">
            <h2>"Medical Records"</h2>
            <div class="record-card">
                <h3>"John Smith"</h3>
                <p class="detail">"Last Updated: March 15, 2024"</p>
                <div class="row-actions">
                    <button class="primary">"View Records"</button>
                    <button class="secondary">"Download"</button>
                </div>
            </div>
        </div>
    }
}
