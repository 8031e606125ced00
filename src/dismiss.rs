//! Overlay Dismissal
//!
//! Closes a transient overlay when a pointer-down lands outside its tracked
//! region. Each call registers one global `pointerdown` subscription and
//! releases it when the owning component's scope is disposed, so no listener
//! outlives the view that registered it.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Run `on_outside` for every pointer-down that lands outside `region`.
///
/// If the region element is not (or no longer) in the view tree, the event
/// is ignored rather than treated as outside, so a late-firing listener can
/// never act on a removed region.
pub fn on_pointer_down_outside(region: NodeRef<Div>, on_outside: impl Fn() + 'static) {
    let handle = window_event_listener(ev::pointerdown, move |ev: web_sys::PointerEvent| {
        let Some(el) = region.get_untracked() else {
            return;
        };
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .map(|node| el.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            on_outside();
        }
    });
    on_cleanup(move || handle.remove());
}
