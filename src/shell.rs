//! Application Shell
//!
//! Owns the action cache, the loading flag, the load error and the edit target.
//! Every mutation happens only after the server confirmed it.

use std::cell::RefCell;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::api::{ActionsApi, ApiError, HttpActionsApi};
use crate::models::{self, Action, ActionDraft, ActionId, ActionInput, ValidationError};

pub const LOAD_FAILED: &str =
    "Failed to load actions. Please try refreshing the page. Check if the server is running";

/// Shell state. `actions` is a cache of the server list, never authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    pub actions: Vec<Action>,
    pub loading: bool,
    pub error: Option<String>,
    /// Action shown in the edit form; `None` shows the create form
    pub editing: Option<Action>,
}

/// Which of the two forms is visible
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(Action),
}

impl ShellState {
    /// Initial state: loading until the first list call settles
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            loading: true,
            error: None,
            editing: None,
        }
    }

    pub fn replace_all(&mut self, actions: Vec<Action>) {
        self.actions = actions;
        self.error = None;
    }

    pub fn apply_created(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Replace the entry that was edited (`id`) and close the edit form
    pub fn apply_updated(&mut self, id: ActionId, updated: Action) {
        if let Some(slot) = self.actions.iter_mut().find(|a| a.id == id) {
            *slot = updated;
        }
        self.editing = None;
    }

    pub fn apply_deleted(&mut self, id: ActionId) {
        self.actions.retain(|a| a.id != id);
    }

    pub fn begin_edit(&mut self, action: Action) {
        self.editing = Some(action);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn form_mode(&self) -> FormMode {
        match &self.editing {
            Some(action) => FormMode::Edit(action.clone()),
            None => FormMode::Create,
        }
    }

    pub fn total_points(&self) -> i64 {
        models::total_points(&self.actions)
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

// ========================
// State Cells
// ========================

/// Somewhere the shell state lives: a signal in the app, a `RefCell` in tests.
pub trait ShellCell {
    fn mutate(&self, f: impl FnOnce(&mut ShellState));
}

impl ShellCell for RwSignal<ShellState> {
    fn mutate(&self, f: impl FnOnce(&mut ShellState)) {
        // The owning view may be gone by the time a request settles
        let _ = self.try_update(f);
    }
}

impl ShellCell for RefCell<ShellState> {
    fn mutate(&self, f: impl FnOnce(&mut ShellState)) {
        f(&mut self.borrow_mut());
    }
}

// ========================
// Operations
// ========================

/// Result of a form submission: blocked locally or rejected remotely
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Invalid(ValidationError),
    Api(ApiError),
}

impl SubmitError {
    /// Form message: the validation rule, or `api_failure` for a rejected call
    pub fn message(&self, api_failure: &str) -> String {
        match self {
            SubmitError::Invalid(rule) => rule.to_string(),
            SubmitError::Api(_) => api_failure.to_string(),
        }
    }
}

/// Fetch the full list and replace the cache. Failure leaves the cache as is and sets the banner.
pub async fn load_actions<A: ActionsApi, S: ShellCell>(api: &A, state: &S) {
    state.mutate(|s| s.loading = true);
    match api.list().await {
        Ok(actions) => {
            log::info!("Loaded {} actions", actions.len());
            state.mutate(|s| s.replace_all(actions));
        }
        Err(err) => {
            log::error!("Loading actions failed: {err}");
            state.mutate(|s| s.error = Some(LOAD_FAILED.to_string()));
        }
    }
    state.mutate(|s| s.loading = false);
}

pub async fn add_action<A: ActionsApi, S: ShellCell>(
    api: &A,
    state: &S,
    draft: &ActionDraft,
) -> Result<Action, ApiError> {
    let created = api.create(draft).await?;
    state.mutate(|s| s.apply_created(created.clone()));
    Ok(created)
}

pub async fn update_action<A: ActionsApi, S: ShellCell>(
    api: &A,
    state: &S,
    id: ActionId,
    draft: &ActionDraft,
) -> Result<Action, ApiError> {
    let updated = api.update(id, draft).await?;
    state.mutate(|s| s.apply_updated(id, updated.clone()));
    Ok(updated)
}

pub async fn delete_action<A: ActionsApi, S: ShellCell>(
    api: &A,
    state: &S,
    id: ActionId,
) -> Result<(), ApiError> {
    api.delete(id).await?;
    state.mutate(|s| s.apply_deleted(id));
    Ok(())
}

/// Validate, then create. Invalid input never reaches `api`.
pub async fn submit_create<A: ActionsApi, S: ShellCell>(
    api: &A,
    state: &S,
    input: &ActionInput,
) -> Result<Action, SubmitError> {
    let draft = input.validate().map_err(SubmitError::Invalid)?;
    add_action(api, state, &draft).await.map_err(SubmitError::Api)
}

/// Validate, then update `id`. Invalid input never reaches `api`.
pub async fn submit_update<A: ActionsApi, S: ShellCell>(
    api: &A,
    state: &S,
    id: ActionId,
    input: &ActionInput,
) -> Result<Action, SubmitError> {
    let draft = input.validate().map_err(SubmitError::Invalid)?;
    update_action(api, state, id, &draft).await.map_err(SubmitError::Api)
}

// ========================
// Reactive Handle
// ========================

/// Copyable handle given to components through context
#[derive(Clone, Copy)]
pub struct Shell {
    state: RwSignal<ShellState>,
    api: StoredValue<HttpActionsApi, LocalStorage>,
}

impl Shell {
    pub fn new(api: HttpActionsApi) -> Self {
        Self {
            state: RwSignal::new(ShellState::new()),
            api: StoredValue::new_local(api),
        }
    }

    pub fn state(&self) -> ReadSignal<ShellState> {
        self.state.read_only()
    }

    fn api(&self) -> HttpActionsApi {
        self.api.get_value()
    }

    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            load_actions(&this.api(), &this.state).await;
        });
    }

    pub async fn submit_create(&self, input: ActionInput) -> Result<Action, SubmitError> {
        submit_create(&self.api(), &self.state, &input).await
    }

    pub async fn submit_update(&self, id: ActionId, input: ActionInput) -> Result<Action, SubmitError> {
        submit_update(&self.api(), &self.state, id, &input).await
    }

    pub async fn delete(&self, id: ActionId) -> Result<(), ApiError> {
        delete_action(&self.api(), &self.state, id).await
    }

    pub fn begin_edit(&self, action: Action) {
        self.state.mutate(|s| s.begin_edit(action));
    }

    pub fn cancel_edit(&self) {
        self.state.mutate(|s| s.cancel_edit());
    }
}
