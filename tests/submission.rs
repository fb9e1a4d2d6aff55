//! Submission gating, business failures and stale outcomes

use std::cell::Cell;
use std::time::Duration;

use mediconnect::forms::{self, BookingRequest, HospitalRegistration, PatientSignup, TimeSlot};
use mediconnect::prelude::*;
use mediconnect::submit::{
    prepare, submit, AsyncSubmissionHandler, LatestOnly, LogSubmission, Resolution, Superseded,
};

struct Accounts {
    taken: &'static str,
    calls: Cell<usize>,
}

impl SubmissionHandler<PatientSignup> for Accounts {
    type Receipt = String;

    fn submit(&self, record: &PatientSignup) -> Result<String, FailureReason> {
        self.calls.set(self.calls.get() + 1);
        if record.email.as_str() == self.taken {
            Err(FailureReason::DuplicateAccount)
        } else {
            Ok(format!("welcome {}", record.full_name))
        }
    }
}

fn signup(email: &str) -> FormState {
    FormState::new(forms::patient_signup())
        .with("fullName", "Joan Doe")
        .and_then(|s| s.with("email", email))
        .and_then(|s| s.with("password", "Abcdef1!"))
        .and_then(|s| s.with("confirmPassword", "Abcdef1!"))
        .and_then(|s| s.with("phone", "+44 7700 900123"))
        .and_then(|s| s.with("gender", "female"))
        .unwrap()
}

#[test]
fn duplicate_account_goes_to_banner_not_fields() {
    let accounts = Accounts {
        taken: "joan@example.com",
        calls: Cell::new(0),
    };
    let mut state = signup("joan@example.com");

    let outcome = submit::<PatientSignup, _>(&mut state, &accounts);
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(FailureReason::DuplicateAccount)
    );
    assert_eq!(state.banner(), Some(&FailureReason::DuplicateAccount));
    assert!(state.errors().is_empty());
    assert_eq!(accounts.calls.get(), 1);
}

#[test]
fn accepted_signup_returns_receipt() {
    let accounts = Accounts {
        taken: "someone@example.com",
        calls: Cell::new(0),
    };
    let mut state = signup("joan@example.com");

    let outcome = submit::<PatientSignup, _>(&mut state, &accounts);
    assert_eq!(outcome, SubmitOutcome::Accepted("welcome Joan Doe".to_string()));
    assert!(state.banner().is_none());
}

#[test]
fn invalid_signup_is_never_sent() {
    let accounts = Accounts {
        taken: "",
        calls: Cell::new(0),
    };
    let mut state = signup("joan@example");

    let outcome = submit::<PatientSignup, _>(&mut state, &accounts);
    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert_eq!(state.error("email"), Some("Invalid email address"));
    assert_eq!(accounts.calls.get(), 0);
}

#[test]
fn edit_during_submission_makes_outcome_stale() {
    let mut state = signup("joan@example.com");
    let (ticket, _record) = prepare::<PatientSignup>(&mut state).unwrap();

    state.set("fullName", "Joan A. Doe").unwrap();
    let resolution = state.resolve(ticket, &Err::<(), _>(FailureReason::DuplicateAccount));

    assert_eq!(resolution, Resolution::Stale);
    assert!(state.banner().is_none());
}

#[test]
fn only_latest_submission_updates_banner() {
    let mut state = signup("joan@example.com");
    let (older, _) = prepare::<PatientSignup>(&mut state).unwrap();
    let (newer, _) = prepare::<PatientSignup>(&mut state).unwrap();

    let network = FailureReason::NetworkError {
        detail: "timed out".into(),
    };
    assert_eq!(state.resolve(newer, &Err::<(), _>(network.clone())), Resolution::Applied);
    assert_eq!(
        state.resolve(older, &Ok::<_, FailureReason>(())),
        Resolution::Stale
    );
    assert_eq!(state.banner(), Some(&network));
}

#[test]
fn log_submission_accepts_every_record_type() {
    let mut booking = FormState::new(forms::booking_request())
        .with("date", "2026-10-20")
        .and_then(|s| s.with("time", "11:00 AM"))
        .and_then(|s| s.with("name", "Asha Verma"))
        .and_then(|s| s.with("phone", "+91 98450 12345"))
        .and_then(|s| s.with("reason", "Annual check-up"))
        .unwrap();
    assert_eq!(
        submit::<BookingRequest, _>(&mut booking, &LogSubmission),
        SubmitOutcome::Accepted(())
    );

    let mut registration = FormState::new(forms::hospital_registration())
        .with("hospitalName", "City Care")
        .and_then(|s| s.with("address", "12 MG Road, Bangalore"))
        .and_then(|s| s.with("contactPerson", "Dr. Rao"))
        .and_then(|s| s.with("email", "admin@citycare.in"))
        .and_then(|s| s.with("phoneNumber", "+91 80 4000 1234"))
        .and_then(|s| s.with("licenseNumber", "MED-12345"))
        .and_then(|s| s.with("password", "longenough"))
        .and_then(|s| s.with("confirmPassword", "longenough"))
        .unwrap();
    assert_eq!(
        submit::<HospitalRegistration, _>(&mut registration, &LogSubmission),
        SubmitOutcome::Accepted(())
    );
}

struct SlowBackend;

impl AsyncSubmissionHandler<BookingRequest> for SlowBackend {
    type Receipt = TimeSlot;

    async fn submit(&self, record: &BookingRequest) -> Result<TimeSlot, FailureReason> {
        if record.time == TimeSlot::TenAm {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        Ok(record.time)
    }
}

fn booking_at(time: &str) -> FormState {
    FormState::new(forms::booking_request())
        .with("date", "2026-10-20")
        .and_then(|s| s.with("time", time))
        .and_then(|s| s.with("name", "Asha Verma"))
        .and_then(|s| s.with("phone", "+91 98450 12345"))
        .and_then(|s| s.with("reason", "Annual check-up"))
        .unwrap()
}

#[tokio::test]
async fn newer_async_submission_cancels_older() {
    let latest = LatestOnly::new();
    let mut state = booking_at("10:00 AM");
    let (first_ticket, first) = prepare::<BookingRequest>(&mut state).unwrap();
    state.set("time", "10:30 AM").unwrap();
    let (second_ticket, second) = prepare::<BookingRequest>(&mut state).unwrap();

    let slow = latest.run(SlowBackend.submit(&first));
    let fast = async {
        tokio::task::yield_now().await;
        latest.run(SlowBackend.submit(&second)).await
    };
    let (slow, fast) = tokio::join!(slow, fast);

    assert_eq!(slow, Err(Superseded));
    let fast = fast.unwrap();
    assert_eq!(fast, Ok(TimeSlot::TenThirtyAm));
    assert_eq!(state.resolve(second_ticket, &fast), Resolution::Applied);
    assert_eq!(
        state.resolve(first_ticket, &Ok::<_, FailureReason>(TimeSlot::TenAm)),
        Resolution::Stale
    );
}
