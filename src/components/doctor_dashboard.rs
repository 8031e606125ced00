//! Doctor Dashboard Shell
//!
//! Tabbed dashboard view. Active tab, notifications panel, profile menu,
//! and mobile sidebar state all live here, private to this instance.
//! Notifications and sidebar close on pointer-down outside their tracked
//! regions; the profile menu only toggles from its own button.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{
    AppointmentsTab, CommunityTab, EarningsTab, OverviewTab, PrescriptionsTab, ProfileTab,
    RecordsTab, VideoConsult,
};
use crate::dismiss::on_pointer_down_outside;
use crate::models::{DashboardTab, Notification, Role};
use crate::sample_data;

#[component]
pub fn DoctorDashboard() -> impl IntoView {
    let navigate = use_navigate();

    let (active_tab, set_active_tab) = signal(DashboardTab::Overview);
    let (show_notifications, set_show_notifications) = signal(false);
    let (show_profile_menu, set_show_profile_menu) = signal(false);
    let (show_sidebar, set_show_sidebar) = signal(false);
    let (appointments, _) = signal(sample_data::doctor_appointments());

    let notification_region = NodeRef::<Div>::new();
    let sidebar_region = NodeRef::<Div>::new();

    on_pointer_down_outside(notification_region, move || {
        set_show_notifications.set(false)
    });
    on_pointer_down_outside(sidebar_region, move || set_show_sidebar.set(false));

    let logout = move |_| {
        web_sys::console::log_1(&"[DASH] Logout, returning to role selection".into());
        navigate("/", Default::default());
    };

    let go_back = move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div class="header-left">
                    <button class="icon-btn" title="Back" on:click=go_back>
                        "‹"
                    </button>
                    <button
                        class="icon-btn menu-btn"
                        title="Menu"
                        on:click=move |_| set_show_sidebar.update(|v| *v = !*v)
                    >
                        "☰"
                    </button>
                    <h1>"Doctor Dashboard"</h1>
                </div>
                <div class="header-right">
                    // Bell and panel share the tracked region, so toggling the
                    // bell never counts as an outside pointer-down.
                    <div class="popover-anchor" node_ref=notification_region>
                        <button
                            class="icon-btn bell"
                            title="Notifications"
                            on:click=move |_| set_show_notifications.update(|v| *v = !*v)
                        >
                            "🔔"
                            <span class="bell-dot"></span>
                        </button>
                        <Show when=move || show_notifications.get()>
                            <NotificationsPanel />
                        </Show>
                    </div>

                    // The profile menu has no outside-click dismissal; it only
                    // toggles from its button.
                    <div class="popover-anchor">
                        <button
                            class="icon-btn"
                            title="Profile"
                            on:click=move |_| set_show_profile_menu.update(|v| *v = !*v)
                        >
                            "👤"
                        </button>
                        <Show when=move || show_profile_menu.get()>
                            <div class="profile-menu">
                                <button on:click=move |_| {
                                    set_active_tab.set(DashboardTab::Profile)
                                }>
                                    "⚙️ Profile Settings"
                                </button>
                                <button class="logout" on:click=logout.clone()>
                                    "⏻ Logout"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </header>

            <div class="dashboard-body">
                <div
                    node_ref=sidebar_region
                    class=move || {
                        if show_sidebar.get() { "sidebar open" } else { "sidebar" }
                    }
                >
                    {DashboardTab::SIDEBAR
                        .iter()
                        .map(|tab| {
                            view! {
                                <TabButton
                                    tab=*tab
                                    active_tab=active_tab
                                    set_active_tab=set_active_tab
                                    set_show_sidebar=set_show_sidebar
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || show_sidebar.get()>
                    <div
                        class="sidebar-backdrop"
                        on:click=move |_| set_show_sidebar.set(false)
                    ></div>
                </Show>

                <main class="dashboard-content">
                    {move || match active_tab.get() {
                        DashboardTab::Overview => {
                            view! { <OverviewTab appointments=appointments /> }.into_any()
                        }
                        DashboardTab::Appointments => {
                            view! { <AppointmentsTab appointments=appointments /> }.into_any()
                        }
                        DashboardTab::Video => {
                            view! { <VideoConsult role=Role::Doctor /> }.into_any()
                        }
                        DashboardTab::Records => view! { <RecordsTab /> }.into_any(),
                        DashboardTab::Prescriptions => {
                            view! { <PrescriptionsTab /> }.into_any()
                        }
                        DashboardTab::Earnings => view! { <EarningsTab /> }.into_any(),
                        DashboardTab::Community => view! { <CommunityTab /> }.into_any(),
                        DashboardTab::Profile => view! { <ProfileTab /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

/// Sidebar tab button; selecting a tab also closes the mobile sidebar
#[component]
fn TabButton(
    tab: DashboardTab,
    active_tab: ReadSignal<DashboardTab>,
    set_active_tab: WriteSignal<DashboardTab>,
    set_show_sidebar: WriteSignal<bool>,
) -> impl IntoView {
    let is_active = move || active_tab.get() == tab;

    view! {
        <button
            class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
            on:click=move |_| {
                set_active_tab.set(tab);
                set_show_sidebar.set(false);
            }
        >
            <span class="tab-icon">{tab.icon()}</span>
            <span>{tab.label()}</span>
        </button>
    }
}

/// Dropdown panel listing the fixed notification entries
#[component]
fn NotificationsPanel() -> impl IntoView {
    let entries: Vec<Notification> = sample_data::notifications();

    view! {
        <div class="notifications-panel">
            <div class="panel-head">
                <h3>"Notifications"</h3>
            </div>
            <div class="panel-body">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <div class=if entry.unread {
                                "notification unread"
                            } else {
                                "notification"
                            }>
                                <p class="message">{entry.message}</p>
                                <p class="age">{entry.age}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
