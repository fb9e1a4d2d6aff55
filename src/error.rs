//! Error types
//!
//! Two families live here. [`SchemaError`] is a programming error caught when
//! a schema is built. [`FieldErrors`] is user-facing data: the one message
//! each failing field shows below its input.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::Semigroup;

/// A schema declaration that cannot be used.
///
/// Returned by [`FormSchemaBuilder::build`](crate::FormSchemaBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two field definitions share a name.
    #[error("form `{form}` declares field `{field}` more than once")]
    DuplicateField {
        /// Form name
        form: &'static str,
        /// Repeated field name
        field: &'static str,
    },
    /// A cross-field rule reads or targets a field the schema does not have.
    #[error("rule `{rule}` in form `{form}` references unknown field `{field}`")]
    UnknownField {
        /// Form name
        form: &'static str,
        /// Rule name
        rule: &'static str,
        /// Missing field name
        field: &'static str,
    },
    /// An enum field has no allowed tokens, so nothing could ever pass.
    #[error("enum field `{field}` in form `{form}` allows no values")]
    EmptyChoices {
        /// Form name
        form: &'static str,
        /// Field name
        field: &'static str,
    },
    /// A form state was asked about a field its schema does not declare.
    #[error("form `{form}` has no field `{field}`")]
    NoSuchField {
        /// Form name
        form: &'static str,
        /// Requested field name
        field: String,
    },
}

/// Field name to message map, at most one message per field.
///
/// Iteration is in field-name order so two results built from the same input
/// compare and print identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding one message.
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Record `message` for `field` unless the field already has one.
    ///
    /// Returns `true` when the message was stored.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) -> bool {
        match self.0.entry(field) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(message.into());
                true
            }
        }
    }

    /// The message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether `field` currently fails.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no field fails.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failing field names in order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// `(field, message)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Drop the entry for `field`.
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }
}

impl Semigroup for FieldErrors {
    /// Left-biased union: existing messages win.
    fn combine(mut self, other: Self) -> Self {
        for (field, message) in other.0 {
            self.insert(field, message);
        }
        self
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<(&'static str, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (&'static str, String)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.insert(field, message);
        }
        errors
    }
}
