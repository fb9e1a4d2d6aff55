//! Test helpers for forms
//!
//! Assertion macros over [`Validation`](crate::Validation) results and, with
//! the `proptest` feature, strategies producing values the built-in rules
//! accept.
//!
//! ```rust
//! use mediconnect::{assert_field_error, assert_invalid, assert_valid, forms, validate, FormState};
//!
//! let mut state = FormState::new(forms::patient_login());
//! state.set("email", "patient@example.com")?;
//! assert_field_error!(validate(forms::patient_login(), &state), "password", "Required");
//!
//! state.set("password", "short")?;
//! assert_invalid!(validate(forms::patient_login(), &state), ["password"]);
//!
//! state.set("password", "longenough")?;
//! assert_valid!(validate(forms::patient_login(), &state));
//! # Ok::<(), mediconnect::SchemaError>(())
//! ```

/// Assert that a validation succeeded; evaluates to the success value.
#[macro_export]
macro_rules! assert_valid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(value) => value,
            $crate::Validation::Failure(errors) => {
                panic!("Expected valid form, got errors: {}", errors);
            }
        }
    };
}

/// Assert that a validation failed on exactly the listed fields.
///
/// Without a field list, any failure passes. Evaluates to the errors.
#[macro_export]
macro_rules! assert_invalid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => errors,
            $crate::Validation::Success(value) => {
                panic!("Expected invalid form, got Success: {:?}", value);
            }
        }
    };
    ($validation:expr, [$($field:expr),* $(,)?]) => {{
        let errors = $crate::assert_invalid!($validation);
        let mut expected: ::std::vec::Vec<&str> = ::std::vec![$($field),*];
        expected.sort_unstable();
        assert_eq!(
            errors.fields().collect::<::std::vec::Vec<_>>(),
            expected,
            "failing fields differ: {}",
            errors
        );
        errors
    }};
}

/// Assert that `field` failed with `message`.
#[macro_export]
macro_rules! assert_field_error {
    ($validation:expr, $field:expr, $message:expr) => {{
        let errors = $crate::assert_invalid!($validation);
        assert_eq!(
            errors.get($field),
            ::std::option::Option::Some($message),
            "unexpected message on {:?}: {}",
            $field,
            errors
        );
    }};
}

/// Strategies for values the built-in rules accept.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    /// Addresses [`is_valid_email`](crate::rule::is_valid_email) accepts.
    pub fn valid_email() -> impl Strategy<Value = String> {
        "[a-z0-9][a-z0-9_+]{0,10}@[a-z][a-z0-9]{0,8}\\.(com|org|in|health)"
    }

    /// Numbers [`is_valid_phone`](crate::rule::is_valid_phone) accepts.
    pub fn valid_phone() -> impl Strategy<Value = String> {
        "\\+[1-9][0-9]{1,2} [0-9]{5} [0-9]{5}"
    }

    /// Passwords meeting [`PasswordPolicy::strict`](crate::rule::PasswordPolicy::strict).
    pub fn strict_password() -> impl Strategy<Value = String> {
        "[A-Z][a-z]{5,10}[0-9][!@#$%^&*]"
    }
}
