//! Predicate combinators for field rules
//!
//! A field rule is a predicate over the raw `str` value plus the message to
//! show when it fails. This module holds the predicates; [`crate::rule`]
//! pairs them with messages.
//!
//! # Example
//!
//! ```rust
//! use mediconnect::predicate::*;
//!
//! let license = PredicateExt::<str>::and(len_min(5), any_char(|c: char| c.is_ascii_digit()));
//!
//! assert!(license.check("MED-123456"));
//! assert!(!license.check("MED-"));
//! assert!(!license.check("M1"));
//! ```

mod combinators;
mod string;

pub use combinators::{And, Not, Predicate, PredicateExt};

pub use string::{
    any_char, contains, len_min, matches, one_of, starts_with, AnyChar, Contains, LenMin, Matches,
    OneOf, StartsWith,
};
