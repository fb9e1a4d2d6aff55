//! Semigroup trait for merging validation errors
//!
//! A Semigroup is a type with an associative binary operation. The form
//! validator uses it to merge the errors found by field rules with the errors
//! found by cross-field rules, without caring what the error container is.
//!
//! For a type to be a valid Semigroup, `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use mediconnect::{FieldErrors, Semigroup};
//!
//! let fields = FieldErrors::single("confirmPassword", "Required");
//! let cross = FieldErrors::single("confirmPassword", "Passwords do not match");
//! assert_eq!(fields.combine(cross).get("confirmPassword"), Some("Required"));
//! ```
//!
//! [`FieldErrors`](crate::FieldErrors) is the container the validator uses.
//! It is left-biased: when both sides carry a message for the same field the
//! left one survives, which is how a field-level failure keeps precedence over
//! a cross-field failure discovered later.

/// A type that supports an associative binary operation
///
/// The `combine` method takes `self` by value. Clone first if the originals
/// are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}
