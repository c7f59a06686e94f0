//! Step definitions and per-step validators.

use chrono::Utc;

use super::form::{ActivityForm, FieldErrors};
use crate::constants::{
    ERROR_DEADLINE_PAST, ERROR_DEADLINE_REQUIRED, ERROR_RECIPIENTS_REQUIRED, ERROR_TITLE_REQUIRED,
};

pub const STEP_DETAILS: &str = "details";
pub const STEP_RECIPIENTS: &str = "recipients";
pub const STEP_DEADLINE: &str = "deadline";

/// Rendering state of a step, derived from the wizard cursor — never stored
/// on the step itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Pending,
    Current,
    Completed,
}

/// One ordered wizard step with its validation rule.
///
/// Validators are pure: they read the form and return a field → message map,
/// they never throw and never touch external state.
#[derive(Clone, Debug)]
pub struct StepDef {
    pub id: &'static str,
    pub label: &'static str,
    pub validate: fn(&ActivityForm) -> FieldErrors,
}

/// The default Details → Recipients → Deadline flow.
pub fn default_steps() -> Vec<StepDef> {
    vec![
        StepDef {
            id: STEP_DETAILS,
            label: "Activity details",
            validate: validate_details,
        },
        StepDef {
            id: STEP_RECIPIENTS,
            label: "Recipients",
            validate: validate_recipients,
        },
        StepDef {
            id: STEP_DEADLINE,
            label: "Deadline",
            validate: validate_deadline,
        },
    ]
}

fn validate_details(form: &ActivityForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.title.trim().is_empty() {
        errors.insert("title".to_string(), ERROR_TITLE_REQUIRED.to_string());
    }
    errors
}

fn validate_recipients(form: &ActivityForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.recipients.is_empty() {
        errors.insert("recipients".to_string(), ERROR_RECIPIENTS_REQUIRED.to_string());
    }
    errors
}

fn validate_deadline(form: &ActivityForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match form.deadline {
        None => {
            errors.insert("deadline".to_string(), ERROR_DEADLINE_REQUIRED.to_string());
        }
        Some(deadline) if deadline < Utc::now().date_naive() => {
            errors.insert("deadline".to_string(), ERROR_DEADLINE_PAST.to_string());
        }
        Some(_) => {}
    }
    errors
}
