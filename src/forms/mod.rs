//! The portal's built-in forms
//!
//! Each form has a process-wide schema and a typed record implementing
//! [`FormRecord`](crate::submit::FormRecord):
//!
//! | schema | record |
//! |---|---|
//! | [`patient_signup`] | [`PatientSignup`] |
//! | [`patient_login`] | [`PatientLogin`] |
//! | [`hospital_registration`] | [`HospitalRegistration`] |
//! | [`hospital_login`] | [`HospitalLogin`] |
//! | [`booking_request`] | [`BookingRequest`] |

mod booking;
mod hospital;
mod patient;

pub use booking::{booking_request, BookingRequest, TimeSlot};
pub use hospital::{hospital_login, hospital_registration, HospitalLogin, HospitalRegistration};
pub use patient::{patient_login, patient_signup, Gender, PatientLogin, PatientSignup};

pub(crate) const INVALID_EMAIL: &str = "Invalid email address";
pub(crate) const INVALID_PHONE: &str = "Invalid phone number";
pub(crate) const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub(crate) const LICENSE_TOO_SHORT: &str = "License number must be at least 5 characters";

/// Every built-in schema, for tooling that lists forms.
pub fn all() -> [&'static crate::FormSchema; 5] {
    [
        patient_signup(),
        patient_login(),
        hospital_registration(),
        hospital_login(),
        booking_request(),
    ]
}
