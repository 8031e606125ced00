//! Earnings Tab

use leptos::prelude::*;

#[component]
pub fn EarningsTab() -> impl IntoView {
    view! {
        <div class="panel">
            <h2>"Earnings"</h2>
            <div class="earnings-grid">
                <div class="earnings-card total">
                    <h3>"Total Earnings"</h3>
                    <p class="figure">"$8,920"</p>
                    <p class="detail">"This Month"</p>
                </div>
                <div class="earnings-card pending">
                    <h3>"Pending Payments"</h3>
                    <p class="figure">"$1,250"</p>
                    <p class="detail">"To be settled"</p>
                </div>
            </div>
        </div>
    }
}
