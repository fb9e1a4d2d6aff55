//! Hospital registration and login.

use once_cell::sync::Lazy;

use super::{INVALID_EMAIL, INVALID_PHONE, LICENSE_TOO_SHORT, PASSWORDS_DIFFER};
use crate::error::FieldErrors;
use crate::rule::{self, CrossFieldRule, PasswordPolicy};
use crate::schema::{FieldDef, FormSchema};
use crate::submit::FormRecord;
use crate::value::{Email, FormData, Password, Phone};

static HOSPITAL_REGISTRATION: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::builder("hospital_registration")
        .field(FieldDef::text("hospitalName").rule(rule::min_len(
            3,
            "Hospital name must be at least 3 characters",
        )))
        .field(
            FieldDef::text("address")
                .rule(rule::min_len(10, "Address must be at least 10 characters")),
        )
        .field(FieldDef::text("contactPerson").rule(rule::min_len(
            3,
            "Contact person must be at least 3 characters",
        )))
        .field(FieldDef::email("email", INVALID_EMAIL))
        .field(FieldDef::phone("phoneNumber", INVALID_PHONE))
        .field(FieldDef::text("licenseNumber").rule(rule::min_len(5, LICENSE_TOO_SHORT)))
        .field(FieldDef::password("password", &PasswordPolicy::basic()))
        .field(FieldDef::password_confirmation("confirmPassword"))
        .cross(CrossFieldRule::fields_match(
            "password",
            "confirmPassword",
            PASSWORDS_DIFFER,
        ))
        .build()
        .expect("hospital registration schema is consistent")
});

static HOSPITAL_LOGIN: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::builder("hospital_login")
        .field(FieldDef::email("email", INVALID_EMAIL))
        .field(FieldDef::text("licenseNumber").rule(rule::min_len(5, LICENSE_TOO_SHORT)))
        .field(FieldDef::password("password", &PasswordPolicy::basic()))
        .build()
        .expect("hospital login schema is consistent")
});

/// Hospital registration: facility details, license and password.
pub fn hospital_registration() -> &'static FormSchema {
    &HOSPITAL_REGISTRATION
}

/// Hospital login: email, license number and password.
pub fn hospital_login() -> &'static FormSchema {
    &HOSPITAL_LOGIN
}

/// A validated hospital registration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HospitalRegistration {
    /// Facility name.
    pub hospital_name: String,
    /// Street address.
    pub address: String,
    /// Person handling the registration.
    pub contact_person: String,
    /// Administrative email.
    pub email: Email,
    /// Facility phone.
    pub phone_number: Phone,
    /// Medical license identifier.
    pub license_number: String,
    /// Account password.
    pub password: Password,
}

impl FormRecord for HospitalRegistration {
    fn schema() -> &'static FormSchema {
        hospital_registration()
    }

    fn from_data(data: &FormData) -> Result<Self, FieldErrors> {
        Ok(Self {
            hospital_name: data.text("hospitalName")?.to_string(),
            address: data.text("address")?.to_string(),
            contact_person: data.text("contactPerson")?.to_string(),
            email: data.email("email")?.clone(),
            phone_number: data.phone("phoneNumber")?.clone(),
            license_number: data.text("licenseNumber")?.to_string(),
            password: data.password("password")?.clone(),
        })
    }
}

/// A validated hospital login.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HospitalLogin {
    /// Administrative email.
    pub email: Email,
    /// Medical license identifier.
    pub license_number: String,
    /// Account password.
    pub password: Password,
}

impl FormRecord for HospitalLogin {
    fn schema() -> &'static FormSchema {
        hospital_login()
    }

    fn from_data(data: &FormData) -> Result<Self, FieldErrors> {
        Ok(Self {
            email: data.email("email")?.clone(),
            license_number: data.text("licenseNumber")?.to_string(),
            password: data.password("password")?.clone(),
        })
    }
}
