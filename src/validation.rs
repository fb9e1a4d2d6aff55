//! Validation type for form results
//!
//! `Validation` is shaped like `Result` but is meant for checks whose failures
//! are data to show the user, not faults to propagate. A failed form carries a
//! [`FieldErrors`](crate::FieldErrors) map; a passed form carries its typed
//! values.
//!
//! # Examples
//!
//! ```
//! use mediconnect::{FieldErrors, Validation};
//!
//! let fields = Validation::<(), _>::failure(FieldErrors::single("email", "Required"));
//! let cross = FieldErrors::single("confirmPassword", "Passwords do not match");
//!
//! let merged = fields.absorb(Some(cross));
//! assert_eq!(merged.errors().map(FieldErrors::len), Some(2));
//! ```

use crate::Semigroup;

/// A check that either succeeds with a value or fails with collected errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with collected errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Borrow the errors, if any
    pub fn errors(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Fold a failure from an independent check into this validation
    ///
    /// A success stays a success only if `other` is `None`. Existing errors
    /// come first in the merge, so a left-biased `E` keeps them.
    pub fn absorb(self, other: Option<E>) -> Self {
        match (self, other) {
            (validation, None) => validation,
            (Validation::Success(_), Some(error)) => Validation::Failure(error),
            (Validation::Failure(error), Some(more)) => Validation::Failure(error.combine(more)),
        }
    }
}
