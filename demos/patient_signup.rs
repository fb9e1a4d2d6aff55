//! Patient signup walkthrough
//!
//! Fills the signup form the way a user would, validating after each edit,
//! then submits it through the logging handler.
//!
//! Run with: cargo run --example patient_signup

use mediconnect::directory::{pin_position, Catalog};
use mediconnect::forms::{self, PatientSignup};
use mediconnect::submit::{submit, LogSubmission, SubmitOutcome};
use mediconnect::{validate_field, FormState, SchemaError};

fn main() -> Result<(), SchemaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let schema = forms::patient_signup();
    let mut state = FormState::new(schema);

    let edits = [
        ("fullName", "Jo"),
        ("fullName", "Joan Doe"),
        ("email", "joan@example"),
        ("email", "joan@example.com"),
        ("password", "abcdef"),
        ("password", "Abcdef1!"),
        ("confirmPassword", "Abcdef1?"),
        ("confirmPassword", "Abcdef1!"),
        ("phone", "98450 12345"),
        ("phone", "+91 98450 12345"),
        ("gender", "female"),
    ];

    for (field, value) in edits {
        state.set(field, value)?;
        match validate_field(schema, &state, field) {
            Some(message) => println!("{field:>16} = {value:<18} -> {message}"),
            None => println!("{field:>16} = {value:<18} -> ok"),
        }
    }

    match submit::<PatientSignup, _>(&mut state, &LogSubmission) {
        SubmitOutcome::Accepted(()) => println!("\nSignup accepted"),
        SubmitOutcome::Rejected(reason) => println!("\nSignup rejected: {reason}"),
        SubmitOutcome::Invalid(errors) => println!("\nFix before submitting: {errors}"),
    }

    println!("\nHospitals near you:");
    for hospital in Catalog::seeded().search("") {
        let pin = pin_position(hospital.id);
        println!(
            "  {hospital} {} at ({}%, {}%)",
            hospital.fee_label(),
            pin.top_pct,
            pin.left_pct
        );
    }

    Ok(())
}
