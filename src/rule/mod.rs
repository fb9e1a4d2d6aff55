//! Field rules
//!
//! A [`FieldRule`] is a predicate over one field's raw value and the fixed
//! message shown when it fails. Rules on a field run in declaration order and
//! the first failure is the one reported.
//!
//! ```rust
//! use mediconnect::rule::{self, FieldRule};
//!
//! let name = rule::min_len(3, "Name must be at least 3 characters");
//! assert_eq!(name.check("Jo"), Some("Name must be at least 3 characters"));
//! assert_eq!(name.check("Joe"), None);
//! ```

mod cross;
mod format;

use std::borrow::Cow;
use std::fmt;

use crate::predicate::{self, Predicate};

pub use cross::{CrossFieldRule, FormValues};
pub use format::{
    date, email, is_valid_email, is_valid_phone, password, phone, PasswordPolicy, DATE_FORMAT,
};

/// One single-field check.
pub struct FieldRule {
    predicate: Box<dyn Predicate<str>>,
    message: Cow<'static, str>,
}

impl FieldRule {
    /// Wrap any `str` predicate with its failure message.
    pub fn new<P>(predicate: P, message: impl Into<Cow<'static, str>>) -> Self
    where
        P: Predicate<str> + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    /// `None` when the value passes, the message when it fails.
    pub fn check(&self, value: &str) -> Option<&str> {
        if self.predicate.check(value) {
            None
        } else {
            Some(&*self.message)
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Text of at least `min` characters.
pub fn min_len(min: usize, message: impl Into<Cow<'static, str>>) -> FieldRule {
    FieldRule::new(predicate::len_min(min), message)
}

/// Value must be one of `allowed`.
pub fn one_of(
    allowed: &'static [&'static str],
    message: impl Into<Cow<'static, str>>,
) -> FieldRule {
    FieldRule::new(predicate::one_of(allowed), message)
}

/// Run `rules` in order and return the first failure.
pub fn first_failure<'r>(
    rules: impl IntoIterator<Item = &'r FieldRule>,
    value: &str,
) -> Option<&'r str> {
    rules.into_iter().find_map(|rule| rule.check(value))
}
