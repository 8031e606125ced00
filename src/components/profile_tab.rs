//! Profile Settings Tab
//!
//! Settings form for the doctor's own details. Submission is a no-op;
//! there is no backend to persist to.

use leptos::prelude::*;

#[component]
pub fn ProfileTab() -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
    };

    view! {
        <div class="panel">
            <h2>"Profile Settings"</h2>
            <form class="profile-form" on:submit=on_submit>
                <div class="form-field">
                    <label>"Full Name"</label>
                    <input type="text" placeholder="Enter your full name" />
                </div>
                <div class="form-field">
                    <label>"Email"</label>
                    <input type="email" placeholder="Enter your email" />
                </div>
                <div class="form-field">
                    <label>"Specialization"</label>
                    <input type="text" placeholder="Enter your specialization" />
                </div>
                <div class="form-field">
                    <label>"Experience (years)"</label>
                    <input type="number" placeholder="Enter years of experience" />
                </div>
                <div class="form-field">
                    <label>"Consultation Fee"</label>
                    <input type="number" placeholder="Enter consultation fee" />
                </div>
                <button type="submit" class="primary">"Save Changes"</button>
            </form>
        </div>
    }
}
