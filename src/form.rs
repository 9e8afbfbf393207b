//! Form State
//!
//! Input and message of the create and edit forms, and how each submission outcome
//! changes them. Components hold a `FormState` in a signal and only wire events to it.

use chrono::NaiveDate;

use crate::models::{Action, ActionDraft, ActionInput};
use crate::shell::SubmitError;

pub const ADD_FAILED: &str = "Failed to add action. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update action. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub input: ActionInput,
    /// Validation or server message shown above the fields
    pub error: Option<String>,
}

impl FormState {
    pub fn for_create(today: NaiveDate) -> Self {
        Self {
            input: ActionInput::defaults(today),
            error: None,
        }
    }

    pub fn for_edit(action: &Action) -> Self {
        Self {
            input: ActionInput::from_action(action),
            error: None,
        }
    }

    /// Validate before submitting. Shows the first failing rule, or clears any old message.
    pub fn check(&mut self) -> Option<ActionDraft> {
        match self.input.validate() {
            Ok(draft) => {
                self.error = None;
                Some(draft)
            }
            Err(rule) => {
                self.error = Some(rule.to_string());
                None
            }
        }
    }

    /// After a create: reset to defaults on success, keep the values for a retry on failure
    pub fn finish_create(&mut self, outcome: &Result<Action, SubmitError>, today: NaiveDate) {
        match outcome {
            Ok(_) => *self = Self::for_create(today),
            Err(err) => self.error = Some(err.message(ADD_FAILED)),
        }
    }

    /// After an update. Success needs nothing here: the shell closes the edit form.
    pub fn finish_update(&mut self, outcome: &Result<Action, SubmitError>) {
        if let Err(err) = outcome {
            self.error = Some(err.message(UPDATE_FAILED));
        }
    }

    /// Re-fill from a newly selected edit target
    pub fn sync_target(&mut self, target: Option<&Action>) {
        if let Some(action) = target {
            *self = Self::for_edit(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::models::ValidationError;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recycling() -> Action {
        Action { id: 1, action: "Recycling".into(), date: day(2025, 1, 1), points: 10 }
    }

    fn typed(action: &str, date: &str, points: &str) -> FormState {
        FormState {
            input: ActionInput { action: action.into(), date: date.into(), points: points.into() },
            error: None,
        }
    }

    fn rejected() -> Result<Action, SubmitError> {
        Err(SubmitError::Api(ApiError::Status { status: 500 }))
    }

    #[test]
    fn test_create_success_resets_to_defaults() {
        let today = day(2026, 3, 9);
        let mut form = typed("Compost", "2025-01-02", "5");
        form.error = Some(ADD_FAILED.into());

        form.finish_create(&Ok(recycling()), today);

        assert_eq!(form, FormState::for_create(today));
        assert_eq!(form.input.points, "0");
        assert_eq!(form.input.date, "2026-03-09");
    }

    #[test]
    fn test_create_failure_keeps_values() {
        let mut form = typed("Compost", "2025-01-02", "5");

        form.finish_create(&rejected(), day(2026, 3, 9));

        assert_eq!(form.input, typed("Compost", "2025-01-02", "5").input);
        assert_eq!(form.error.as_deref(), Some(ADD_FAILED));
    }

    #[test]
    fn test_check_sets_and_clears_message() {
        let mut form = typed("Compost", "2025-01-02", "0");
        assert_eq!(form.check(), None);
        assert_eq!(form.error.as_deref(), Some("Points must be greater than zero"));

        // Fixed input clears the old message before the request goes out
        form.input.points = "5".into();
        let draft = form.check().unwrap();
        assert_eq!(draft.points, 5);
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_invalid_outcome_shows_rule() {
        let mut form = typed("", "2025-01-02", "5");
        form.finish_create(&Err(SubmitError::Invalid(ValidationError::MissingDescription)), day(2026, 1, 1));
        assert_eq!(form.error.as_deref(), Some("Action description is required"));
        assert_eq!(form.input.action, "");
    }

    #[test]
    fn test_update_failure_keeps_values() {
        let mut form = FormState::for_edit(&recycling());
        form.input.points = "12".into();

        form.finish_update(&rejected());
        assert_eq!(form.input.points, "12");
        assert_eq!(form.error.as_deref(), Some(UPDATE_FAILED));

        form.error = None;
        form.finish_update(&Ok(recycling()));
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_new_edit_target_refills_form() {
        let mut form = FormState::for_edit(&recycling());
        form.input.action = "half typed".into();
        form.error = Some(UPDATE_FAILED.into());

        let bike = Action { id: 2, action: "Bike".into(), date: day(2025, 2, 1), points: 3 };
        form.sync_target(Some(&bike));
        assert_eq!(form, FormState::for_edit(&bike));
        assert_eq!(form.input.date, "2025-02-01");

        // Closing the editor leaves the fields alone
        form.sync_target(None);
        assert_eq!(form, FormState::for_edit(&bike));
    }
}
