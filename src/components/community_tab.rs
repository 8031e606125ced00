//! Medical Community Tab

use leptos::prelude::*;

#[component]
pub fn CommunityTab() -> impl IntoView {
    view! {
        <div class="panel">
            <h2>"Medical Community"</h2>
            <div class="community-toolbar">
                <input type="text" placeholder="Search discussions..." />
                <button class="primary">"Start Discussion"</button>
            </div>
            <div class="record-card">
                <div class="card-head">
                    <span class="card-icon">"👥"</span>
                    <h3>"Medical Research Group"</h3>
                </div>
                <p class="detail">"Discuss latest research and share expertise with peers."</p>
                <button class="primary">"Join Group"</button>
            </div>
        </div>
    }
}
