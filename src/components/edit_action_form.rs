//! Edit Action Form Component
//!
//! Same fields and validation as the create form, pre-filled from the action being
//! edited. Submitting sends an update for that id; Cancel closes without a request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ActionFields;
use crate::context::use_app_context;
use crate::form::FormState;
use crate::models::Action;

#[component]
pub fn EditActionForm(editing: Memo<Option<Action>>) -> impl IntoView {
    let shell = use_app_context().shell;

    let form = RwSignal::new(
        editing
            .get_untracked()
            .map(|action| FormState::for_edit(&action))
            .unwrap_or_default(),
    );

    // Re-fill whenever a different action is handed in
    Effect::new(move |_| {
        editing.with(|target| form.update(|f| f.sync_target(target.as_ref())));
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = editing.get_untracked() else { return };
        if form.try_update(FormState::check).flatten().is_none() {
            return;
        }
        let input = form.with_untracked(|f| f.input.clone());

        spawn_local(async move {
            let outcome = shell.submit_update(target.id, input).await;
            if let Ok(updated) = &outcome {
                log::info!("Updated action #{}", updated.id);
            }
            let _ = form.try_update(|f| f.finish_update(&outcome));
        });
    };

    view! {
        <section class="card action-form editing">
            <div class="card-header">
                <h3>"Edit Action"</h3>
            </div>
            <div class="card-body">
                {move || form.with(|f| f.error.clone()).map(|message| view! {
                    <div class="alert alert-danger">{message}</div>
                })}
                <form on:submit=on_submit>
                    <div class="form-row">
                        <ActionFields form=form id_prefix="edit-" />
                        <div class="form-buttons">
                            <button type="submit" class="btn-primary">"Update Action"</button>
                            <button type="button" class="btn-secondary" on:click=move |_| shell.cancel_edit()>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </form>
            </div>
        </section>
    }
}
