//! Per-form mutable state
//!
//! A [`FormState`] belongs to one mounted form. It holds the raw values the
//! user typed, the errors currently on display, and the form-level banner set
//! by a rejected submission. Every edit bumps a revision counter so that a
//! submission outcome computed against older values can be recognised as
//! stale and dropped.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{FieldErrors, SchemaError};
use crate::rule::FormValues;
use crate::schema::FormSchema;
use crate::submit::{FailureReason, Resolution, SubmissionTicket};
use crate::validation::Validation;
use crate::validator::{self, ValidationResult};

/// Raw values, active errors and submission bookkeeping for one form.
#[derive(Debug, Clone)]
pub struct FormState {
    form: &'static str,
    fields: Vec<&'static str>,
    values: BTreeMap<&'static str, String>,
    errors: FieldErrors,
    banner: Option<FailureReason>,
    revision: u64,
    latest_submission: u64,
}

impl FormState {
    /// Empty state for a freshly mounted `schema` form.
    pub fn new(schema: &FormSchema) -> Self {
        Self {
            form: schema.name(),
            fields: schema.field_names().collect(),
            values: BTreeMap::new(),
            errors: FieldErrors::new(),
            banner: None,
            revision: 0,
            latest_submission: 0,
        }
    }

    /// Name of the form this state belongs to.
    pub fn form(&self) -> &'static str {
        self.form
    }

    /// Store the raw value of `field` and drop its displayed error, which
    /// described the old value.
    ///
    /// # Errors
    ///
    /// [`SchemaError::NoSuchField`] when the form has no such field.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), SchemaError> {
        let field = self.resolve_field(field)?;
        self.values.insert(field, value.into());
        self.errors.remove(field);
        self.revision += 1;
        Ok(())
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Result<Self, SchemaError> {
        self.set(field, value)?;
        Ok(self)
    }

    /// Forget the value of `field`, as if never entered.
    pub fn unset(&mut self, field: &str) -> Result<(), SchemaError> {
        let field = self.resolve_field(field)?;
        if self.values.remove(field).is_some() {
            self.errors.remove(field);
            self.revision += 1;
        }
        Ok(())
    }

    /// Raw value of `field`.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Read-only view of all raw values.
    pub fn values(&self) -> FormValues<'_> {
        FormValues::new(&self.values)
    }

    /// Errors currently on display.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error currently shown under `field`.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    /// Form-level failure from the last applied submission.
    pub fn banner(&self) -> Option<&FailureReason> {
        self.banner.as_ref()
    }

    /// Counter bumped on every value change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Validate against `schema` and show the resulting errors.
    pub fn validate(&mut self, schema: &FormSchema) -> ValidationResult {
        let result = validator::validate(schema, self);
        self.apply(&result);
        result
    }

    /// Show the errors of `result`; a success clears them all.
    pub fn apply(&mut self, result: &ValidationResult) {
        self.errors = match result {
            Validation::Success(_) => FieldErrors::new(),
            Validation::Failure(errors) => errors.clone(),
        };
    }

    /// Clear values, errors and banner, as after a successful submission.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors = FieldErrors::new();
        self.banner = None;
        self.revision += 1;
    }

    /// Register a new submission; any earlier one becomes stale.
    pub fn begin_submission(&mut self) -> SubmissionTicket {
        self.latest_submission += 1;
        SubmissionTicket {
            sequence: self.latest_submission,
            revision: self.revision,
        }
    }

    /// Apply a submission outcome if it is still current.
    ///
    /// The outcome is applied only when `ticket` is the latest submission and
    /// no value changed since it was issued. A rejection sets the banner; an
    /// acceptance clears it.
    pub fn resolve<R>(
        &mut self,
        ticket: SubmissionTicket,
        outcome: &Result<R, FailureReason>,
    ) -> Resolution {
        if ticket.sequence != self.latest_submission || ticket.revision != self.revision {
            warn!(
                form = self.form,
                ticket = ticket.sequence,
                latest = self.latest_submission,
                "discarding stale submission outcome"
            );
            return Resolution::Stale;
        }
        self.banner = outcome.as_ref().err().cloned();
        Resolution::Applied
    }

    fn resolve_field(&self, field: &str) -> Result<&'static str, SchemaError> {
        self.fields
            .iter()
            .copied()
            .find(|known| *known == field)
            .ok_or_else(|| SchemaError::NoSuchField {
                form: self.form,
                field: field.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms;

    fn login() -> FormState {
        FormState::new(forms::patient_login())
    }

    #[test]
    fn set_tracks_revision() {
        let mut state = login();
        assert_eq!(state.revision(), 0);
        state.set("email", "a@b.com").unwrap();
        state.set("email", "a@b.co").unwrap();
        assert_eq!(state.revision(), 2);
        assert_eq!(state.value("email"), Some("a@b.co"));
    }

    #[test]
    fn unknown_field_is_an_error() {
        let mut state = login();
        let err = state.set("username", "jo").unwrap_err();
        assert_eq!(
            err,
            SchemaError::NoSuchField {
                form: "patient_login",
                field: "username".into()
            }
        );
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn unset_only_bumps_on_change() {
        let mut state = login();
        state.unset("email").unwrap();
        assert_eq!(state.revision(), 0);
        state.set("email", "a@b.com").unwrap();
        state.unset("email").unwrap();
        assert_eq!(state.revision(), 2);
        assert_eq!(state.value("email"), None);
    }

    #[test]
    fn validate_keeps_only_failing_fields() {
        let mut state = login().with("email", "nope").unwrap();
        state.validate(forms::patient_login());
        assert_eq!(state.error("email"), Some("Invalid email address"));
        assert_eq!(state.error("password"), Some("Required"));

        state.set("email", "jo@example.com").unwrap();
        state.set("password", "longenough").unwrap();
        assert!(state.validate(forms::patient_login()).is_success());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn editing_a_field_drops_its_stale_error() {
        let mut state = login().with("email", "nope").unwrap();
        state.validate(forms::patient_login());
        assert_eq!(state.error("email"), Some("Invalid email address"));

        state.set("email", "fixed@example.com").unwrap();
        assert_eq!(state.error("email"), None);
        assert_eq!(state.error("password"), Some("Required"));

        state.validate(forms::patient_login());
        state.unset("password").unwrap();
        assert_eq!(state.error("password"), Some("Required"));
        state.set("password", "short").unwrap();
        state.validate(forms::patient_login());
        state.unset("password").unwrap();
        assert_eq!(state.error("password"), None);
    }

    #[test]
    fn latest_submission_outcome_sets_banner() {
        let mut state = login();
        let ticket = state.begin_submission();
        let outcome: Result<(), _> = Err(FailureReason::InvalidCredentials);
        assert_eq!(state.resolve(ticket, &outcome), Resolution::Applied);
        assert_eq!(state.banner(), Some(&FailureReason::InvalidCredentials));

        let ticket = state.begin_submission();
        assert_eq!(state.resolve(ticket, &Ok(())), Resolution::Applied);
        assert_eq!(state.banner(), None);
    }

    #[test]
    fn superseded_submission_is_stale() {
        let mut state = login();
        let first = state.begin_submission();
        let second = state.begin_submission();

        let rejected: Result<(), _> = Err(FailureReason::DuplicateAccount);
        assert_eq!(state.resolve(first, &rejected), Resolution::Stale);
        assert_eq!(state.banner(), None);
        assert_eq!(state.resolve(second, &Ok(())), Resolution::Applied);
    }

    #[test]
    fn edit_after_submission_makes_outcome_stale() {
        let mut state = login();
        let ticket = state.begin_submission();
        state.set("email", "new@example.com").unwrap();

        let rejected: Result<(), _> = Err(FailureReason::InvalidCredentials);
        assert_eq!(state.resolve(ticket, &rejected), Resolution::Stale);
        assert_eq!(state.banner(), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = login().with("email", "x").unwrap();
        state.validate(forms::patient_login());
        let ticket = state.begin_submission();
        let _ = state.resolve(ticket, &Err::<(), _>(FailureReason::InvalidCredentials));
        state.reset();
        assert_eq!(state.value("email"), None);
        assert!(state.errors().is_empty());
        assert!(state.banner().is_none());
    }
}
