//! Multi-step activity wizard.
//!
//! # Module Components
//!
//! - [`form`] - Form data and field-level validation errors
//! - [`steps`] - Ordered step definitions and their validators
//! - [`extract`] - Projection of the leaf selection into recipients
//! - [`submit`] - The enrich → create → assign submission chain
//! - [`tasks`] - Background task management for async collaborator calls
//!
//! The [`ActivityWizard`] itself is a small state machine over the ordered
//! steps: forward navigation is gated on the current step's validator,
//! backward navigation is free, and a final all-steps validation runs at
//! submission as defense in depth.

pub mod extract;
pub mod form;
pub mod steps;
pub mod submit;
pub mod tasks;

// Re-export core types for easier access from other modules
pub use form::{ActivityForm, FieldErrors};
pub use steps::{default_steps, StepDef, StepState};
pub use tasks::{TaskId, WizardEvent, WizardTaskManager};

use self::steps::STEP_RECIPIENTS;
use crate::backend::{ActivityDraft, Recipient};
use crate::config::WizardConfig;
use crate::filter::SelectionStore;
use crate::model::FilterGroup;

/// State machine over the ordered wizard steps.
///
/// The wizard owns its recipient selection store (the School → Grade →
/// Class → Student picker behind the Recipients step) and re-derives the
/// submittable recipient list from it before validating that step, so
/// select-all shortcuts taken through the hierarchy count the same as
/// explicit leaf toggles.
///
/// Wizards are plain values: create one per flow, hand it to the hosting
/// dialog, and [`reset`](ActivityWizard::reset) it when the dialog closes.
#[derive(Clone, Debug)]
pub struct ActivityWizard {
    steps: Vec<StepDef>,
    /// 1-based cursor into `steps`.
    current: usize,
    completed: Vec<bool>,
    errors: FieldErrors,
    pub form: ActivityForm,
    recipients: SelectionStore,
    config: WizardConfig,
}

impl ActivityWizard {
    pub fn new() -> Self {
        Self::with_config(WizardConfig::default())
    }

    pub fn with_config(config: WizardConfig) -> Self {
        let steps = steps::default_steps();
        let completed = vec![false; steps.len()];
        Self {
            steps,
            current: 1,
            completed,
            errors: FieldErrors::new(),
            form: ActivityForm::default(),
            recipients: SelectionStore::default(),
            config,
        }
    }

    /// Replace the step sequence (the default flow covers the standard
    /// three steps).
    pub fn with_steps(mut self, steps: Vec<StepDef>) -> Self {
        self.completed = vec![false; steps.len()];
        self.steps = steps;
        self.current = 1;
        self
    }

    pub fn steps(&self) -> &[StepDef] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// 1-based index of the current step.
    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_step_completed(&self, step: usize) -> bool {
        self.completed.get(step.wrapping_sub(1)).copied().unwrap_or(false)
    }

    /// Derived per-step state for a stepper rendering.
    pub fn step_state(&self, step: usize) -> StepState {
        if step == self.current {
            StepState::Current
        } else if self.is_step_completed(step) {
            StepState::Completed
        } else {
            StepState::Pending
        }
    }

    /// Jump directly to a step, clamped to the valid range. Displayed
    /// errors are cleared; direct navigation is not a validation event.
    pub fn go_to_step(&mut self, step: usize) {
        self.current = step.clamp(1, self.steps.len().max(1));
        self.errors.clear();
    }

    /// Validate the current step and advance on success.
    ///
    /// Leaving the Recipients step first re-derives `form.recipients` from
    /// the live selection store. On failure the cursor stays put and the
    /// step's errors are displayed.
    pub fn next_step(&mut self) -> bool {
        if self.steps.is_empty() {
            return false;
        }
        if self.steps[self.current - 1].id == STEP_RECIPIENTS {
            self.refresh_recipients();
        }
        let errors = (self.steps[self.current - 1].validate)(&self.form);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        self.errors.clear();
        self.completed[self.current - 1] = true;
        if self.current < self.steps.len() {
            self.current += 1;
        }
        true
    }

    /// Step back without validating. Floors at the first step.
    pub fn previous_step(&mut self) {
        if self.current > 1 {
            self.current -= 1;
            self.errors.clear();
        }
    }

    /// Run every step's validator regardless of the cursor and merge the
    /// error maps. Used as a final gate at submission.
    pub fn validate_all_steps(&mut self) -> FieldErrors {
        self.refresh_recipients();
        let mut all = FieldErrors::new();
        for step in &self.steps {
            all.extend((step.validate)(&self.form));
        }
        all
    }

    /// The wizard's recipient hierarchy (populate after a directory fetch,
    /// mutate from the picker UI).
    pub fn recipient_store(&self) -> &SelectionStore {
        &self.recipients
    }

    pub fn recipient_store_mut(&mut self) -> &mut SelectionStore {
        &mut self.recipients
    }

    pub fn set_recipient_groups(&mut self, groups: Vec<FilterGroup>) {
        self.recipients.set_groups(groups);
    }

    /// Re-derive the submittable recipient list from the selection store.
    pub fn refresh_recipients(&mut self) {
        self.form.recipients = extract::extract_recipients(
            &self.recipients,
            &self.config.leaf_category,
            &self.config.institution_field,
        );
    }

    /// Final validation plus draft assembly.
    ///
    /// Returns the merged per-field errors instead of a draft when any step
    /// fails; the errors are also kept for display.
    pub fn prepare_submission(&mut self) -> Result<(ActivityDraft, Vec<Recipient>), FieldErrors> {
        let errors = self.validate_all_steps();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }
        let draft = ActivityDraft {
            title: self.form.title.trim().to_string(),
            description: self.form.description.clone(),
            model_id: self.form.model_id.clone(),
            question_ids: Vec::new(),
            deadline: self.form.deadline,
        };
        Ok((draft, self.form.recipients.clone()))
    }

    /// Back to a pristine wizard; called when the hosting dialog closes.
    pub fn reset(&mut self) {
        self.current = 1;
        self.completed.fill(false);
        self.errors.clear();
        self.form = ActivityForm::default();
        self.recipients = SelectionStore::default();
    }
}

impl Default for ActivityWizard {
    fn default() -> Self {
        Self::new()
    }
}
