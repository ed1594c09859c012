//! Form controller: draft state, validation and mock submission.
//!
//! A [`FormController`] owns one form instance. It moves through
//! [`FormState`] as the user edits and submits:
//!
//! ```text
//! Editing -> Validating -> Submitting -> Succeeded
//!    ^            |             |
//!    |            v             v
//!    +-------- (invalid)      Failed --(edit)--> Editing
//! ```
//!
//! Every rejected or terminal submit pushes exactly one notification into
//! the controller's outbox.

pub mod recipe;
pub mod review;

use std::future::Future;

use serde::Serialize;

use crate::error::CoreError;
use crate::notification::{Notification, Outbox, RECIPE_NOTICE_MS};
use crate::validation::{evaluate_field, FieldErrors, FieldInput, FieldRule, FieldSource};

pub use recipe::{RecipeForm, RecipeSchema};
pub use review::{ReviewForm, ReviewSchema};

/// Lifecycle of one form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    Editing,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// What happened to a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome<R> {
    /// A submission is already in flight; nothing was done.
    Busy,
    /// A required field is empty; a blocking notice was raised.
    Blocked,
    /// Whole-record validation failed with these errors.
    Invalid(FieldErrors),
    /// The sink accepted the submission.
    Succeeded(R),
    /// The sink declined (`receipt` is set) or errored (`receipt` is `None`).
    Failed { receipt: Option<R> },
}

impl<R> SubmitOutcome<R> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

/// Per-form rules, normalization and notification copy.
pub trait FormSchema {
    type Draft: FieldSource + Clone + Default;
    type Output;
    type Receipt;

    /// Short form name for logs.
    fn name(&self) -> &'static str;

    fn rules(&self) -> &'static [FieldRule];

    /// Write one raw input into the draft.
    fn apply(
        &self,
        draft: &mut Self::Draft,
        field: &str,
        input: FieldInput,
    ) -> Result<(), CoreError>;

    /// Blocking notice for the first required field that is still empty.
    fn missing_required(&self, draft: &Self::Draft) -> Option<Notification>;

    /// Whole-record validation producing the normalized output.
    fn validate(&self, draft: &Self::Draft) -> Result<Self::Output, FieldErrors>;

    /// Whether the sink's receipt means the submission went through.
    fn is_accepted(&self, _receipt: &Self::Receipt) -> bool {
        true
    }

    fn success_notice(&self, receipt: &Self::Receipt) -> Notification;

    /// Notice for a receipt the sink returned but did not accept.
    fn rejected_notice(&self, _receipt: &Self::Receipt) -> Notification {
        self.failure_notice()
    }

    /// Generic notice for an unexpected sink error.
    fn failure_notice(&self) -> Notification;

    fn invalid_notice(&self) -> Notification {
        Notification::error(
            "Please Fix the Errors",
            "Some fields need your attention before submitting.",
            RECIPE_NOTICE_MS,
        )
    }
}

/// Holds a draft, its error set and submission state for one form.
pub struct FormController<S: FormSchema> {
    schema: S,
    draft: S::Draft,
    errors: FieldErrors,
    state: FormState,
    outbox: Outbox,
}

impl<S: FormSchema> FormController<S> {
    /// A fresh form with initial (empty) values.
    pub fn new(schema: S) -> Self {
        Self::with_draft(schema, S::Draft::default())
    }

    /// A form pre-filled with `draft`. No validation runs until an edit or submit.
    pub fn with_draft(schema: S, draft: S::Draft) -> Self {
        Self {
            schema,
            draft,
            errors: FieldErrors::new(),
            state: FormState::Editing,
            outbox: Outbox::new(),
        }
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn draft(&self) -> &S::Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Notifications raised and not yet taken.
    pub fn notifications(&self) -> &Outbox {
        &self.outbox
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.outbox.take()
    }

    /// Update one field and re-run that field's rules.
    ///
    /// Returns the field's current messages. Editing after a finished
    /// submission returns the form to [`FormState::Editing`].
    pub fn edit(&mut self, field: &str, input: FieldInput) -> Result<&[String], CoreError> {
        self.schema.apply(&mut self.draft, field, input)?;
        if matches!(self.state, FormState::Succeeded | FormState::Failed) {
            self.state = FormState::Editing;
        }
        self.revalidate_field(field);
        Ok(self.errors.get(field).unwrap_or_default())
    }

    /// Re-run the rules for a single field without changing its value.
    pub fn revalidate_field(&mut self, field: &str) {
        let messages = evaluate_field(self.schema.rules(), &self.draft, field);
        self.errors.set(field, messages);
    }

    /// Validate every field, replacing the error set. Returns true when valid.
    pub fn validate_all(&mut self) -> bool {
        match self.schema.validate(&self.draft) {
            Ok(_) => {
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Submit the draft through `send`.
    ///
    /// `send` is only called when every required field is filled and the
    /// whole record validates. On success the draft resets to initial
    /// values; on failure it is kept so the user can retry.
    pub async fn submit<F, Fut>(&mut self, send: F) -> SubmitOutcome<S::Receipt>
    where
        F: FnOnce(S::Output) -> Fut,
        Fut: Future<Output = Result<S::Receipt, CoreError>>,
    {
        if self.state == FormState::Submitting {
            tracing::debug!(form = self.schema.name(), "Submit ignored, already in flight");
            return SubmitOutcome::Busy;
        }

        if let Some(notice) = self.schema.missing_required(&self.draft) {
            tracing::debug!(form = self.schema.name(), title = %notice.title, "Submit blocked");
            self.state = FormState::Editing;
            self.outbox.push(notice);
            return SubmitOutcome::Blocked;
        }

        self.state = FormState::Validating;
        let output = match self.schema.validate(&self.draft) {
            Ok(output) => output,
            Err(errors) => {
                tracing::debug!(
                    form = self.schema.name(),
                    invalid_fields = errors.len(),
                    "Submit rejected by validation"
                );
                self.errors = errors.clone();
                self.state = FormState::Editing;
                self.outbox.push(self.schema.invalid_notice());
                return SubmitOutcome::Invalid(errors);
            }
        };
        self.errors.clear();

        self.state = FormState::Submitting;
        match send(output).await {
            Ok(receipt) if self.schema.is_accepted(&receipt) => {
                tracing::info!(form = self.schema.name(), "Form submitted");
                self.state = FormState::Succeeded;
                self.draft = S::Draft::default();
                self.outbox.push(self.schema.success_notice(&receipt));
                SubmitOutcome::Succeeded(receipt)
            }
            Ok(receipt) => {
                tracing::warn!(form = self.schema.name(), "Form submission declined");
                self.state = FormState::Failed;
                self.outbox.push(self.schema.rejected_notice(&receipt));
                SubmitOutcome::Failed {
                    receipt: Some(receipt),
                }
            }
            Err(error) => {
                tracing::error!(form = self.schema.name(), error = %error, "Form submission failed");
                self.state = FormState::Failed;
                self.outbox.push(self.schema.failure_notice());
                SubmitOutcome::Failed { receipt: None }
            }
        }
    }

    /// Drop the draft, errors and any abandoned submission.
    pub fn reset(&mut self) {
        self.draft = S::Draft::default();
        self.errors.clear();
        self.state = FormState::Editing;
    }
}
