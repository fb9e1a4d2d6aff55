//! Patient signup and login.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::{INVALID_EMAIL, INVALID_PHONE, PASSWORDS_DIFFER};
use crate::error::FieldErrors;
use crate::rule::{self, CrossFieldRule, PasswordPolicy};
use crate::schema::{FieldDef, FormSchema};
use crate::submit::FormRecord;
use crate::value::{Email, FormData, Password, Phone};

const GENDERS: &[&str] = &["male", "female", "other"];

static PATIENT_SIGNUP: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::builder("patient_signup")
        .field(FieldDef::text("fullName").rule(rule::min_len(
            3,
            "Name must be at least 3 characters",
        )))
        .field(FieldDef::email("email", INVALID_EMAIL))
        .field(FieldDef::password("password", &PasswordPolicy::strict()))
        .field(FieldDef::password_confirmation("confirmPassword"))
        .field(FieldDef::phone("phone", INVALID_PHONE))
        .field(FieldDef::choice("gender", GENDERS))
        .cross(CrossFieldRule::fields_match(
            "password",
            "confirmPassword",
            PASSWORDS_DIFFER,
        ))
        .build()
        .expect("patient signup schema is consistent")
});

static PATIENT_LOGIN: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::builder("patient_login")
        .field(FieldDef::email("email", INVALID_EMAIL))
        .field(FieldDef::password("password", &PasswordPolicy::basic()))
        .build()
        .expect("patient login schema is consistent")
});

/// Patient signup: name, email, strict password with confirmation, phone, gender.
pub fn patient_signup() -> &'static FormSchema {
    &PATIENT_SIGNUP
}

/// Patient login: email and password.
pub fn patient_login() -> &'static FormSchema {
    &PATIENT_LOGIN
}

/// Gender options offered at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    /// `male`
    Male,
    /// `female`
    Female,
    /// `other`
    Other,
}

impl Gender {
    /// Form token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Expected one of: {}", GENDERS.join(", "))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated patient signup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PatientSignup {
    /// Full name, three characters or more.
    pub full_name: String,
    /// Contact email.
    pub email: Email,
    /// Account password.
    pub password: Password,
    /// Contact phone.
    pub phone: Phone,
    /// Declared gender.
    pub gender: Gender,
}

impl FormRecord for PatientSignup {
    fn schema() -> &'static FormSchema {
        patient_signup()
    }

    fn from_data(data: &FormData) -> Result<Self, FieldErrors> {
        let gender = data.choice("gender")?;
        Ok(Self {
            full_name: data.text("fullName")?.to_string(),
            email: data.email("email")?.clone(),
            password: data.password("password")?.clone(),
            phone: data.phone("phone")?.clone(),
            gender: gender
                .parse()
                .map_err(|message: String| FieldErrors::single("gender", message))?,
        })
    }
}

/// A validated patient login.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PatientLogin {
    /// Account email.
    pub email: Email,
    /// Account password.
    pub password: Password,
}

impl FormRecord for PatientLogin {
    fn schema() -> &'static FormSchema {
        patient_login()
    }

    fn from_data(data: &FormData) -> Result<Self, FieldErrors> {
        Ok(Self {
            email: data.email("email")?.clone(),
            password: data.password("password")?.clone(),
        })
    }
}
