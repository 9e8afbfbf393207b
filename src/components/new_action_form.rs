//! New Action Form Component
//!
//! Collects one new action, validates it and hands it to the shell.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ActionFields, ServerStatus};
use crate::context::use_app_context;
use crate::form::FormState;

/// Form for creating new actions
#[component]
pub fn NewActionForm() -> impl IntoView {
    let shell = use_app_context().shell;

    let form = RwSignal::new(FormState::for_create(Local::now().date_naive()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.try_update(FormState::check).flatten().is_none() {
            return;
        }
        let input = form.with_untracked(|f| f.input.clone());

        spawn_local(async move {
            let outcome = shell.submit_create(input).await;
            if let Ok(created) = &outcome {
                log::info!("Added action #{}", created.id);
            }
            let _ = form.try_update(|f| f.finish_create(&outcome, Local::now().date_naive()));
        });
    };

    view! {
        <section class="card action-form">
            <div class="card-header">
                <h3>"Add New Sustainability Action"</h3>
                <ServerStatus />
            </div>
            <div class="card-body">
                {move || form.with(|f| f.error.clone()).map(|message| view! {
                    <div class="alert alert-danger">{message}</div>
                })}
                <form on:submit=on_submit>
                    <div class="form-row">
                        <ActionFields form=form id_prefix="" />
                        <div class="form-buttons">
                            <button type="submit" class="btn-primary">"Add"</button>
                        </div>
                    </div>
                </form>
            </div>
        </section>
    }
}
