//! Typed values produced by a passing validation.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::error::FieldErrors;

/// Message used when a field has no value at all.
pub const REQUIRED: &str = "Required";

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Email(String);

impl Email {
    pub(crate) fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// The address as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part after the `@`.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An international phone number as entered, spaces included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Phone(String);

impl Phone {
    pub(crate) fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// The number as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `+` followed by the digits, spaces removed.
    ///
    /// ```rust
    /// # use mediconnect::{forms, FormState, validate};
    /// # let state = FormState::new(forms::booking_request())
    /// #     .with("date", "2026-10-20").unwrap()
    /// #     .with("time", "10:30 AM").unwrap()
    /// #     .with("name", "Asha Verma").unwrap()
    /// #     .with("phone", "+91 98450 12345").unwrap()
    /// #     .with("reason", "Follow-up visit").unwrap();
    /// # let data = validate(forms::booking_request(), &state).into_result().unwrap();
    /// let phone = data.phone("phone").unwrap();
    /// assert_eq!(phone.e164(), "+919845012345");
    /// ```
    pub fn e164(&self) -> String {
        self.0.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A password. `Debug`, `Display` and serialization never show it.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// The secret itself, for handing to a real backend.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([redacted])")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[redacted]")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Password {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("[redacted]")
    }
}

/// A coerced field value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    /// Free text.
    Text(String),
    /// Email address.
    Email(Email),
    /// Phone number.
    Phone(Phone),
    /// Password.
    Password(Password),
    /// The matched token of an enum field.
    Choice(&'static str),
    /// Calendar date.
    Date(NaiveDate),
}

/// Typed values of a form that passed validation, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FormData(BTreeMap<&'static str, FieldValue>);

impl FormData {
    pub(crate) fn insert(&mut self, field: &'static str, value: FieldValue) {
        self.0.insert(field, value);
    }

    /// The value of `field`.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(field, value)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.0.iter().map(|(field, value)| (*field, value))
    }

    /// Text value of `field`.
    ///
    /// # Errors
    ///
    /// A [`REQUIRED`] error on `field` when it is absent or not text.
    pub fn text(&self, field: &'static str) -> Result<&str, FieldErrors> {
        match self.get(field) {
            Some(FieldValue::Text(text)) => Ok(text),
            _ => Err(missing(field)),
        }
    }

    /// Email value of `field`.
    pub fn email(&self, field: &'static str) -> Result<&Email, FieldErrors> {
        match self.get(field) {
            Some(FieldValue::Email(email)) => Ok(email),
            _ => Err(missing(field)),
        }
    }

    /// Phone value of `field`.
    pub fn phone(&self, field: &'static str) -> Result<&Phone, FieldErrors> {
        match self.get(field) {
            Some(FieldValue::Phone(phone)) => Ok(phone),
            _ => Err(missing(field)),
        }
    }

    /// Password value of `field`.
    pub fn password(&self, field: &'static str) -> Result<&Password, FieldErrors> {
        match self.get(field) {
            Some(FieldValue::Password(password)) => Ok(password),
            _ => Err(missing(field)),
        }
    }

    /// Matched token of enum `field`.
    pub fn choice(&self, field: &'static str) -> Result<&'static str, FieldErrors> {
        match self.get(field) {
            Some(FieldValue::Choice(token)) => Ok(token),
            _ => Err(missing(field)),
        }
    }

    /// Date value of `field`.
    pub fn date(&self, field: &'static str) -> Result<NaiveDate, FieldErrors> {
        match self.get(field) {
            Some(FieldValue::Date(date)) => Ok(*date),
            _ => Err(missing(field)),
        }
    }
}

fn missing(field: &'static str) -> FieldErrors {
    FieldErrors::single(field, REQUIRED)
}
