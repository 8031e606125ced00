//! Video Consultation Component
//!
//! Call surface for the Video tab. Call setup, transport, and teardown
//! live outside this crate; the component only needs the caller's role
//! tag to choose its captions.

use leptos::prelude::*;

use crate::models::Role;

#[component]
pub fn VideoConsult(role: Role) -> impl IntoView {
    let hint = match role {
        Role::Doctor => "Waiting for a patient to join the call...",
        Role::Patient => "Waiting for your doctor to join the call...",
    };

    view! {
        <div class="panel video-consult">
            <h2>"Video Consultation"</h2>
            <div class="video-stage">
                <span class="video-glyph">"🎥"</span>
            </div>
            <p class="detail">{hint}</p>
            <button class="primary" disabled=true>"Join Call"</button>
        </div>
    }
}
