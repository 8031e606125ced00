//! Role/Auth Screen
//!
//! Role selection followed by a role- and mode-specific auth form.
//! Submission performs no real authentication; it only navigates to the
//! selected role's dashboard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_forms::{DoctorSignupForm, LoginForm, PatientSignupForm};
use crate::models::{AuthMode, Role};

#[component]
pub fn AuthPage() -> impl IntoView {
    let (selected_role, set_selected_role) = signal::<Option<Role>>(None);
    let (auth_mode, set_auth_mode) = signal(AuthMode::Login);
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // No credential checks here; the form only picks a destination.
        if let Some(role) = selected_role.get() {
            web_sys::console::log_1(&format!("[AUTH] Continuing as {}", role.as_str()).into());
            navigate(&role.dashboard_path(), Default::default());
        }
    };

    view! {
        <div class="auth-screen">
            {move || match selected_role.get() {
                None => view! {
                    <div class="role-select">
                        <div class="role-select-heading">
                            <h1>"Welcome to Arogya Saathi"</h1>
                            <p>"Choose your role to proceed"</p>
                        </div>
                        <div class="role-buttons">
                            <RoleButton
                                role=Role::Patient
                                icon="🧑"
                                class="role-btn patient"
                                set_selected_role=set_selected_role
                            />
                            <RoleButton
                                role=Role::Doctor
                                icon="🩺"
                                class="role-btn doctor"
                                set_selected_role=set_selected_role
                            />
                        </div>
                    </div>
                }.into_any(),
                Some(role) => {
                    let on_submit = on_submit.clone();
                    view! {
                        <div class="auth-card-wrap">
                            <button
                                class="back-btn"
                                on:click=move |_| set_selected_role.set(None)
                            >
                                "← Back to role selection"
                            </button>
                            <div class="auth-card">
                                <h2>
                                    {move || format!("{} {}", role.title(), auth_mode.get().submit_label())}
                                </h2>
                                <form class="auth-form" on:submit=on_submit>
                                    {move || match (auth_mode.get(), role) {
                                        (AuthMode::Signup, Role::Patient) => {
                                            view! { <PatientSignupForm /> }.into_any()
                                        }
                                        (AuthMode::Signup, Role::Doctor) => {
                                            view! { <DoctorSignupForm /> }.into_any()
                                        }
                                        (AuthMode::Login, _) => view! { <LoginForm /> }.into_any(),
                                    }}
                                    <button type="submit" class="submit-btn">
                                        {move || auth_mode.get().submit_label()}
                                    </button>
                                    <button
                                        type="button"
                                        class="mode-toggle"
                                        on:click=move |_| set_auth_mode.update(|m| *m = m.toggled())
                                    >
                                        {move || auth_mode.get().toggle_prompt()}
                                    </button>
                                </form>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

/// Large role selection button
#[component]
fn RoleButton(
    role: Role,
    icon: &'static str,
    class: &'static str,
    set_selected_role: WriteSignal<Option<Role>>,
) -> impl IntoView {
    view! {
        <button class=class on:click=move |_| set_selected_role.set(Some(role))>
            <span class="role-icon">{icon}</span>
            <span>{role.title()}</span>
        </button>
    }
}
