//! Submission boundary
//!
//! Validation decides whether a form may be sent; a [`SubmissionHandler`]
//! decides what sending means. The built-in [`LogSubmission`] handler does
//! what the portal has always done with a valid form: write it to the log
//! and report success. A real backend implements the same trait and reports
//! business failures as [`FailureReason`]s, which land in the form-level
//! banner rather than on a field.
//!
//! ```rust
//! use mediconnect::forms::PatientLogin;
//! use mediconnect::submit::{submit, LogSubmission, SubmitOutcome};
//! use mediconnect::{forms, FormState};
//!
//! let mut state = FormState::new(forms::patient_login())
//!     .with("email", "patient@example.com")?
//!     .with("password", "longenough")?;
//!
//! let outcome = submit::<PatientLogin, _>(&mut state, &LogSubmission);
//! assert!(matches!(outcome, SubmitOutcome::Accepted(())));
//! # Ok::<(), mediconnect::SchemaError>(())
//! ```

mod latest;

use std::fmt;

use thiserror::Error;
use tracing::info;

use crate::error::FieldErrors;
use crate::schema::FormSchema;
use crate::state::FormState;
use crate::validation::Validation;
use crate::value::FormData;

pub use latest::{LatestOnly, Superseded};

/// Business failure reported by a backend after validation passed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "code", rename_all = "snake_case"))]
pub enum FailureReason {
    /// Registration for an account that already exists.
    #[error("An account with these details already exists")]
    DuplicateAccount,
    /// Login with unknown email, license number or password.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// The backend could not be reached.
    #[error("Network error: {detail}")]
    NetworkError {
        /// Transport-level description
        detail: String,
    },
}

impl FailureReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::DuplicateAccount => "duplicate_account",
            FailureReason::InvalidCredentials => "invalid_credentials",
            FailureReason::NetworkError { .. } => "network_error",
        }
    }
}

/// A typed record built from a passing form.
pub trait FormRecord: Sized {
    /// Schema the record's form is validated against.
    fn schema() -> &'static FormSchema;

    /// Build the record from validated data.
    ///
    /// # Errors
    ///
    /// Field errors when `data` lacks a field or holds the wrong kind, which
    /// only happens if `data` came from a different schema.
    fn from_data(data: &FormData) -> Result<Self, FieldErrors>;
}

/// Performs the action behind a form.
pub trait SubmissionHandler<R> {
    /// What a successful submission yields.
    type Receipt;

    /// Send `record`.
    fn submit(&self, record: &R) -> Result<Self::Receipt, FailureReason>;
}

/// Async twin of [`SubmissionHandler`] for handlers backed by I/O.
///
/// Run calls through [`LatestOnly`] so a newer submission cancels an older
/// one still in flight.
#[allow(async_fn_in_trait)]
pub trait AsyncSubmissionHandler<R> {
    /// What a successful submission yields.
    type Receipt;

    /// Send `record`.
    async fn submit(&self, record: &R) -> Result<Self::Receipt, FailureReason>;
}

/// Logs the submitted record at `info` level and accepts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmission;

impl<R: FormRecord + fmt::Debug> SubmissionHandler<R> for LogSubmission {
    type Receipt = ();

    fn submit(&self, record: &R) -> Result<(), FailureReason> {
        info!(form = R::schema().name(), ?record, "form submitted");
        Ok(())
    }
}

impl<R: FormRecord + fmt::Debug> AsyncSubmissionHandler<R> for LogSubmission {
    type Receipt = ();

    async fn submit(&self, record: &R) -> Result<(), FailureReason> {
        SubmissionHandler::submit(self, record)
    }
}

/// Identifies one submission attempt of a [`FormState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub(crate) sequence: u64,
    pub(crate) revision: u64,
}

impl SubmissionTicket {
    /// Position of this attempt among the form's submissions, from 1.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Whether [`FormState::resolve`] applied an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome now drives the banner.
    Applied,
    /// A newer submission or an edit made the outcome obsolete; ignored.
    Stale,
}

/// Result of [`submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    /// Validation failed; the errors are on the state.
    Invalid(FieldErrors),
    /// The handler refused; the reason is in the banner.
    Rejected(FailureReason),
    /// The handler accepted.
    Accepted(T),
}

/// Validate `state` and build its typed record.
///
/// On success the record comes with a ticket for [`FormState::resolve`];
/// on failure the errors are already on display.
pub fn prepare<R: FormRecord>(
    state: &mut FormState,
) -> Result<(SubmissionTicket, R), FieldErrors> {
    let data = match state.validate(R::schema()) {
        Validation::Success(data) => data,
        Validation::Failure(errors) => return Err(errors),
    };
    match R::from_data(&data) {
        Ok(record) => Ok((state.begin_submission(), record)),
        Err(errors) => {
            state.apply(&Validation::failure(errors.clone()));
            Err(errors)
        }
    }
}

/// Validate, convert and hand the record to `handler`.
pub fn submit<R, H>(state: &mut FormState, handler: &H) -> SubmitOutcome<H::Receipt>
where
    R: FormRecord,
    H: SubmissionHandler<R>,
{
    let (ticket, record) = match prepare::<R>(state) {
        Ok(prepared) => prepared,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    let outcome = handler.submit(&record);
    state.resolve(ticket, &outcome);
    match outcome {
        Ok(receipt) => SubmitOutcome::Accepted(receipt),
        Err(reason) => SubmitOutcome::Rejected(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{self, HospitalLogin, PatientLogin};
    use std::cell::RefCell;
    use tracing_test::traced_test;

    struct Registry {
        known: Vec<&'static str>,
        seen: RefCell<Vec<String>>,
    }

    impl SubmissionHandler<PatientLogin> for Registry {
        type Receipt = usize;

        fn submit(&self, record: &PatientLogin) -> Result<usize, FailureReason> {
            self.seen.borrow_mut().push(record.email.to_string());
            self.known
                .iter()
                .position(|email| *email == record.email.as_str())
                .ok_or(FailureReason::InvalidCredentials)
        }
    }

    fn login(email: &str, password: &str) -> FormState {
        FormState::new(forms::patient_login())
            .with("email", email)
            .and_then(|s| s.with("password", password))
            .unwrap()
    }

    #[test]
    fn invalid_form_never_reaches_handler() {
        let registry = Registry {
            known: vec![],
            seen: RefCell::new(vec![]),
        };
        let mut state = login("not-an-email", "short");

        let outcome = submit::<PatientLogin, _>(&mut state, &registry);
        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected invalid outcome");
        };
        assert_eq!(errors.len(), 2);
        assert!(registry.seen.borrow().is_empty());
        assert_eq!(state.errors(), &errors);
    }

    #[test]
    fn rejection_sets_banner() {
        let registry = Registry {
            known: vec!["known@example.com"],
            seen: RefCell::new(vec![]),
        };
        let mut state = login("stranger@example.com", "longenough");

        let outcome = submit::<PatientLogin, _>(&mut state, &registry);
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(FailureReason::InvalidCredentials)
        );
        assert_eq!(state.banner(), Some(&FailureReason::InvalidCredentials));
        assert!(state.errors().is_empty());
    }

    #[test]
    fn acceptance_returns_receipt_and_clears_banner() {
        let registry = Registry {
            known: vec!["a@example.com", "known@example.com"],
            seen: RefCell::new(vec![]),
        };
        let mut state = login("known@example.com", "wrongpass");
        let _ = submit::<PatientLogin, _>(&mut state, &Registry {
            known: vec![],
            seen: RefCell::new(vec![]),
        });
        assert!(state.banner().is_some());

        let outcome = submit::<PatientLogin, _>(&mut state, &registry);
        assert_eq!(outcome, SubmitOutcome::Accepted(1));
        assert!(state.banner().is_none());
    }

    #[test]
    #[traced_test]
    fn log_submission_redacts_password() {
        let mut state = FormState::new(forms::hospital_login())
            .with("email", "admin@hospital.com")
            .and_then(|s| s.with("licenseNumber", "MED-123456"))
            .and_then(|s| s.with("password", "supersecret"))
            .unwrap();

        let outcome = submit::<HospitalLogin, _>(&mut state, &LogSubmission);
        assert_eq!(outcome, SubmitOutcome::Accepted(()));
        assert!(logs_contain("form submitted"));
        assert!(logs_contain("hospital_login"));
        assert!(logs_contain("MED-123456"));
        assert!(!logs_contain("supersecret"));
    }

    #[test]
    fn failure_codes() {
        assert_eq!(FailureReason::DuplicateAccount.code(), "duplicate_account");
        assert_eq!(FailureReason::InvalidCredentials.code(), "invalid_credentials");
        let network = FailureReason::NetworkError {
            detail: "connection reset".into(),
        };
        assert_eq!(network.code(), "network_error");
        assert_eq!(network.to_string(), "Network error: connection reset");
    }

    #[test]
    fn prepare_issues_fresh_tickets() {
        let mut state = login("a@example.com", "longenough");
        let (first, _) = prepare::<PatientLogin>(&mut state).unwrap();
        let (second, _) = prepare::<PatientLogin>(&mut state).unwrap();
        assert_eq!(first.sequence(), 1);
        assert_eq!(second.sequence(), 2);
        assert_eq!(
            state.resolve(first, &Ok::<_, FailureReason>(())),
            Resolution::Stale
        );
    }
}
