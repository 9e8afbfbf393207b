//! Action Fields Component
//!
//! Description, date and points inputs shared by the create and edit forms.

use leptos::prelude::*;

use crate::form::FormState;

/// Inputs bound to `form`. `id_prefix` keeps element ids unique per form.
#[component]
pub fn ActionFields(
    form: RwSignal<FormState>,
    #[prop(into)] id_prefix: String,
) -> impl IntoView {
    let action_id = format!("{id_prefix}action");
    let date_id = format!("{id_prefix}date");
    let points_id = format!("{id_prefix}points");

    view! {
        <div class="field">
            <label for=action_id.clone()>"Action:"</label>
            <input
                type="text"
                id=action_id
                name="action"
                placeholder="e.g., Recycling"
                prop:value=move || form.with(|f| f.input.action.clone())
                on:input=move |ev| form.update(|f| f.input.action = event_target_value(&ev))
            />
        </div>

        <div class="field">
            <label for=date_id.clone()>"Date:"</label>
            <input
                type="date"
                id=date_id
                name="date"
                prop:value=move || form.with(|f| f.input.date.clone())
                on:input=move |ev| form.update(|f| f.input.date = event_target_value(&ev))
            />
        </div>

        <div class="field">
            <label for=points_id.clone()>"Points:"</label>
            <input
                type="number"
                id=points_id
                name="points"
                min="1"
                prop:value=move || form.with(|f| f.input.points.clone())
                on:input=move |ev| form.update(|f| f.input.points = event_target_value(&ev))
            />
        </div>
    }
}
