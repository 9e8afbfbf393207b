//! Server Status Badge
//!
//! Renders the shared liveness signal as a label.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ServerStatus() -> impl IntoView {
    let liveness = use_app_context().liveness;

    view! {
        <span class=move || liveness.get().css_class()>
            {move || liveness.get().label()}
        </span>
    }
}
