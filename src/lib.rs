//! # MediConnect
//!
//! Form validation for the MediConnect healthcare portal.
//!
//! Every portal form (patient signup and login, hospital registration and
//! login, appointment booking) is a static [`FormSchema`]. Raw input lives in
//! a [`FormState`]; [`validate`] turns the two into either typed
//! [`FormData`] or one message per failing field, never both and never a
//! panic. Submission is gated on validation and handled behind the
//! [`submit::SubmissionHandler`] trait, with stale outcomes ignored.
//!
//! ## Quick Example
//!
//! ```rust
//! use mediconnect::{forms, validate, FormState, Validation};
//!
//! let state = FormState::new(forms::patient_signup())
//!     .with("fullName", "Jo")?
//!     .with("email", "a@b.com")?
//!     .with("password", "Abcdef1!")?
//!     .with("confirmPassword", "Abcdef1?")?
//!     .with("phone", "+1 234567890")?
//!     .with("gender", "female")?;
//!
//! match validate(forms::patient_signup(), &state) {
//!     Validation::Success(_) => unreachable!(),
//!     Validation::Failure(errors) => {
//!         assert_eq!(errors.get("fullName"), Some("Name must be at least 3 characters"));
//!         assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
//!         assert_eq!(errors.len(), 2);
//!     }
//! }
//! # Ok::<(), mediconnect::SchemaError>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod directory;
pub mod error;
pub mod forms;
pub mod predicate;
pub mod rule;
pub mod schema;
pub mod semigroup;
pub mod state;
pub mod submit;
pub mod testing;
pub mod validation;
pub mod validator;
pub mod value;

// Re-exports
pub use error::{FieldErrors, SchemaError};
pub use schema::{FieldDef, FieldKind, FormSchema, FormSchemaBuilder};
pub use semigroup::Semigroup;
pub use state::FormState;
pub use validation::Validation;
pub use validator::{validate, validate_field, ValidationResult};
pub use value::{Email, FieldValue, FormData, Password, Phone};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{FieldErrors, SchemaError};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::rule::{CrossFieldRule, FieldRule, PasswordPolicy};
    pub use crate::schema::{FieldDef, FieldKind, FormSchema};
    pub use crate::semigroup::Semigroup;
    pub use crate::state::FormState;
    pub use crate::submit::{FailureReason, FormRecord, SubmissionHandler, SubmitOutcome};
    pub use crate::validation::Validation;
    pub use crate::validator::{validate, ValidationResult};
}
