//! Dashboard Card Components
//!
//! Shared card shell and label/value rows used by the tab views.

use leptos::prelude::*;

/// Icon + title card wrapping arbitrary content
#[component]
pub fn DashboardCard(
    title: &'static str,
    icon: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dashboard-card">
            <div class="card-head">
                <span class="card-icon">{icon}</span>
                <h3>{title}</h3>
            </div>
            {children()}
        </div>
    }
}

/// Label/value row inside a stats card
#[component]
pub fn StatRow(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="stat-row">
            <span>{label}</span>
            <span class="stat-value">{value}</span>
        </div>
    }
}
