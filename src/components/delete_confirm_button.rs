//! Delete Confirm Button Component
//!
//! Inline delete confirmation: nothing is deleted until the user confirms.

use leptos::prelude::*;

/// Where the button is in its two-step flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmStep {
    #[default]
    Idle,
    Confirming,
}

impl ConfirmStep {
    pub fn request(&mut self) {
        *self = ConfirmStep::Confirming;
    }

    /// True only if a confirmation was pending; always returns to idle
    pub fn confirm(&mut self) -> bool {
        std::mem::take(self) == ConfirmStep::Confirming
    }

    pub fn cancel(&mut self) {
        *self = ConfirmStep::Idle;
    }
}

/// Inline delete confirmation button
///
/// Shows a Delete button initially. When clicked, shows `prompt` with confirm/cancel buttons.
///
/// # Arguments
/// * `prompt` - Question shown while confirming (e.g. `Delete "Recycling"?`)
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let step = RwSignal::new(ConfirmStep::Idle);
    let confirming = Memo::new(move |_| step.get() == ConfirmStep::Confirming);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="btn-danger btn-sm"
                on:click=move |ev| {
                    ev.stop_propagation();
                    step.update(ConfirmStep::request);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        if step.try_update(ConfirmStep::confirm).unwrap_or(false) {
                            on_confirm.run(());
                        }
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        step.update(ConfirmStep::cancel);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_requires_request() {
        let mut step = ConfirmStep::default();
        assert!(!step.confirm());

        step.request();
        assert!(step.confirm());
        assert_eq!(step, ConfirmStep::Idle);
        // A second click after the first confirm does nothing
        assert!(!step.confirm());
    }

    #[test]
    fn test_cancel_drops_pending_confirmation() {
        let mut step = ConfirmStep::default();
        step.request();
        step.cancel();
        assert_eq!(step, ConfirmStep::Idle);
        assert!(!step.confirm());
    }
}
