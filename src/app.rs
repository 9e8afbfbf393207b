//! Sustainability Actions Tracker App
//!
//! Root component: builds the API client from config, starts the liveness poller,
//! loads the action list and switches between the create and edit forms.

use leptos::prelude::*;

use crate::api::HttpActionsApi;
use crate::components::{ActionTable, EditActionForm, Footer, Header, NewActionForm};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::liveness::provide_liveness;
use crate::shell::{FormMode, Shell};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_env();
    log::info!("Using actions API at {}", config.api_base);

    let api = HttpActionsApi::new(config.clone());
    let shell = Shell::new(api.clone());
    let liveness = provide_liveness(api, config.health_interval);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let ctx = AppContext::new(shell, liveness, (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Load actions on mount and on every retry
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("Loading actions, trigger={}", trigger);
        shell.load();
    });

    let state = shell.state();
    let mode = Memo::new(move |_| state.with(|s| s.form_mode()));
    let is_editing = Memo::new(move |_| matches!(mode.get(), FormMode::Edit(_)));
    let editing = Memo::new(move |_| match mode.get() {
        FormMode::Edit(action) => Some(action),
        FormMode::Create => None,
    });
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));

    view! {
        <div class="app-layout">
            <Header />

            <main class="container">
                {move || error.get().map(|message| view! {
                    <div class="alert alert-danger load-error">
                        <span>{message}</span>
                        <button type="button" class="retry-btn" on:click=move |_| ctx.reload()>
                            "Retry"
                        </button>
                    </div>
                })}

                <Show
                    when=move || is_editing.get()
                    fallback=|| view! { <NewActionForm /> }
                >
                    <EditActionForm editing=editing />
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div class="loading">
                            <div class="spinner" role="status"></div>
                            <p>"Loading actions..."</p>
                        </div>
                    }
                >
                    <ActionTable />
                </Show>
            </main>

            <Footer />
        </div>
    }
}
