//! The form validator
//!
//! [`validate`] is a pure function of a schema and a state. It runs each
//! field's rules in order (first failure wins), then every cross-field rule,
//! and merges the two error sets so a field-level message is never replaced
//! by a cross-field one. Missing values fail with `"Required"`.
//!
//! ```rust
//! use mediconnect::{forms, validate, FormState, Validation};
//!
//! let state = FormState::new(forms::hospital_login())
//!     .with("email", "admin@hospital.com")?
//!     .with("licenseNumber", "MED-1")?
//!     .with("password", "longenough1")?;
//!
//! let result = validate(forms::hospital_login(), &state);
//! assert!(matches!(result, Validation::Success(_)));
//! # Ok::<(), mediconnect::SchemaError>(())
//! ```

use chrono::NaiveDate;
use tracing::debug;

use crate::error::FieldErrors;
use crate::rule::DATE_FORMAT;
use crate::schema::{FieldDef, FieldKind, FormSchema};
use crate::state::FormState;
use crate::validation::Validation;
use crate::value::{Email, FieldValue, FormData, Password, Phone, REQUIRED};

/// Typed data on success, one message per failing field otherwise.
pub type ValidationResult = Validation<FormData, FieldErrors>;

/// Validate every field of `schema` against the raw values in `state`.
///
/// Never panics and never mutates `state`. Values in `state` for fields the
/// schema does not declare are ignored.
pub fn validate(schema: &FormSchema, state: &FormState) -> ValidationResult {
    let values = state.values();

    let mut data = FormData::default();
    let mut field_errors = FieldErrors::new();
    for field in schema.fields() {
        match check_field(field, values.get(field.name())) {
            Ok(value) => data.insert(field.name(), value),
            Err(message) => {
                field_errors.insert(field.name(), message);
            }
        }
    }

    let cross_errors: FieldErrors = schema
        .cross_rules()
        .iter()
        .filter_map(|rule| {
            rule.check(&values)
                .map(|message| (rule.target(), message.to_string()))
        })
        .collect();

    let fields = if field_errors.is_empty() {
        Validation::success(data)
    } else {
        Validation::failure(field_errors)
    };
    let result = fields.absorb((!cross_errors.is_empty()).then_some(cross_errors));

    debug!(
        form = schema.name(),
        errors = result.errors().map_or(0, FieldErrors::len),
        "validated form"
    );
    result
}

/// The message `field` would show after a full validation, if any.
///
/// Includes cross-field failures targeting `field`.
pub fn validate_field(schema: &FormSchema, state: &FormState, field: &str) -> Option<String> {
    validate(schema, state)
        .errors()
        .and_then(|errors| errors.get(field))
        .map(str::to_string)
}

fn check_field(field: &FieldDef, raw: Option<&str>) -> Result<FieldValue, String> {
    let raw = raw.ok_or_else(|| REQUIRED.to_string())?;
    if let Some(message) = field.check(raw) {
        return Err(message.to_string());
    }
    coerce(field.kind(), raw)
}

fn coerce(kind: FieldKind, raw: &str) -> Result<FieldValue, String> {
    match kind {
        FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
        FieldKind::Email => Ok(FieldValue::Email(Email::new(raw))),
        FieldKind::Phone => Ok(FieldValue::Phone(Phone::new(raw))),
        FieldKind::Password => Ok(FieldValue::Password(Password::new(raw))),
        FieldKind::Choice(allowed) => allowed
            .iter()
            .copied()
            .find(|token| *token == raw)
            .map(FieldValue::Choice)
            .ok_or_else(|| format!("Expected one of: {}", allowed.join(", "))),
        FieldKind::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(FieldValue::Date)
            .map_err(|_| "Invalid date".to_string()),
    }
}
