//! Frontend Models
//!
//! Data structures matching the actions API, plus the raw form input and its validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-assigned action identifier
pub type ActionId = u64;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Action record (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    pub action: String,
    pub date: NaiveDate,
    pub points: i32,
}

/// Payload shared by create and update. Only produced by [`ActionInput::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDraft {
    pub action: String,
    pub date: NaiveDate,
    pub points: i32,
}

/// Raw form fields as typed by the user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionInput {
    pub action: String,
    pub date: String,
    pub points: String,
}

/// First failing validation rule. `Display` is the message shown on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Action description is required")]
    MissingDescription,
    #[error("Date is required")]
    MissingDate,
    #[error("Points must be greater than zero")]
    NonPositivePoints,
}

impl ActionInput {
    /// Create-form defaults: empty description, the given day, zero points
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            action: String::new(),
            date: today.format(DATE_FORMAT).to_string(),
            points: "0".to_string(),
        }
    }

    /// Edit-form pre-population from an existing record
    pub fn from_action(action: &Action) -> Self {
        Self {
            action: action.action.clone(),
            date: action.date.format(DATE_FORMAT).to_string(),
            points: action.points.to_string(),
        }
    }

    /// Check description, then date, then points; the first failure wins.
    ///
    /// Points are read from their leading integer (`"5.5"` is 5); no digits, or a value
    /// outside `i32`, counts as zero. The description is sent as typed.
    pub fn validate(&self) -> Result<ActionDraft, ValidationError> {
        if self.action.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::MissingDate)?;

        let points = leading_int(&self.points);
        if points <= 0 {
            return Err(ValidationError::NonPositivePoints);
        }

        Ok(ActionDraft {
            action: self.action.clone(),
            date,
            points,
        })
    }
}

/// Optional sign followed by digits at the start of `raw`, else 0
fn leading_int(raw: &str) -> i32 {
    let s = raw.trim();
    let sign = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign..].bytes().take_while(u8::is_ascii_digit).count();
    s[..sign + digits].parse().unwrap_or(0)
}

/// Sum of points over the given actions
pub fn total_points(actions: &[Action]) -> i64 {
    actions.iter().map(|a| i64::from(a.points)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(action: &str, date: &str, points: &str) -> ActionInput {
        ActionInput {
            action: action.to_string(),
            date: date.to_string(),
            points: points.to_string(),
        }
    }

    #[test]
    fn test_valid_input_yields_draft() {
        let draft = input("Compost", "2025-01-02", "5").validate().unwrap();
        assert_eq!(draft.action, "Compost");
        assert_eq!(draft.date, day(2025, 1, 2));
        assert_eq!(draft.points, 5);
    }

    #[test]
    fn test_blank_description_fails_first() {
        // All three rules fail; description is reported
        let err = input("   ", "", "0").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingDescription);
        assert_eq!(err.to_string(), "Action description is required");
    }

    #[test]
    fn test_missing_or_malformed_date() {
        assert_eq!(input("Bike", "", "3").validate(), Err(ValidationError::MissingDate));
        assert_eq!(input("Bike", "not-a-date", "3").validate(), Err(ValidationError::MissingDate));
        assert_eq!(ValidationError::MissingDate.to_string(), "Date is required");
    }

    #[test]
    fn test_points_must_be_positive() {
        for points in ["0", "-4", "", "abc"] {
            let err = input("Bike", "2025-01-01", points).validate().unwrap_err();
            assert_eq!(err, ValidationError::NonPositivePoints, "points={points:?}");
        }
        assert_eq!(
            ValidationError::NonPositivePoints.to_string(),
            "Points must be greater than zero"
        );
    }

    #[test]
    fn test_points_use_leading_integer() {
        for (raw, expected) in [("5.5", 5), ("12abc", 12), (" +7 ", 7), ("3e2", 3)] {
            let draft = input("Bike", "2025-01-01", raw).validate().unwrap();
            assert_eq!(draft.points, expected, "points={raw:?}");
        }
        // Larger than the server's integer column
        assert_eq!(
            input("Bike", "2025-01-01", "99999999999").validate(),
            Err(ValidationError::NonPositivePoints)
        );
        assert_eq!(input("Bike", "2025-01-01", "-").validate(), Err(ValidationError::NonPositivePoints));
    }

    #[test]
    fn test_defaults_and_prefill() {
        let defaults = ActionInput::defaults(day(2026, 3, 9));
        assert_eq!(defaults, input("", "2026-03-09", "0"));

        let existing = Action {
            id: 7,
            action: "Recycling".to_string(),
            date: day(2025, 1, 1),
            points: 10,
        };
        let prefilled = ActionInput::from_action(&existing);
        assert_eq!(prefilled, input("Recycling", "2025-01-01", "10"));
        // Unchanged pre-filled input validates back to the same fields
        let draft = prefilled.validate().unwrap();
        assert_eq!((draft.action, draft.date, draft.points), (existing.action, existing.date, existing.points));
    }

    #[test]
    fn test_wire_format() {
        let parsed: Vec<Action> = serde_json::from_str(
            r#"[{"id":1,"action":"Recycling","date":"2025-01-01","points":10}]"#,
        )
        .unwrap();
        assert_eq!(parsed[0].date, day(2025, 1, 1));

        let draft = input("Compost", "2025-01-02", "5").validate().unwrap();
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"action": "Compost", "date": "2025-01-02", "points": 5})
        );
    }

    #[test]
    fn test_total_points() {
        let actions = vec![
            Action { id: 1, action: "Recycling".into(), date: day(2025, 1, 1), points: 10 },
            Action { id: 2, action: "Compost".into(), date: day(2025, 1, 2), points: 5 },
        ];
        assert_eq!(total_points(&actions), 15);
        assert_eq!(total_points(&[]), 0);
    }
}
