//! Format rules: email, phone, password strength, calendar date.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::FieldRule;
use crate::predicate::{self, Predicate, PredicateExt};

/// Date layout accepted by [`date`] (`2026-10-16`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Local part may hold `_ ' + - .` but must end on a letter, digit, `_`, `+` or `-`.
// Labels start alphanumeric; the TLD is alphabetic, two letters or more.
// Case folding is ASCII only: `(?i)` alone would let `[a-z]` match `ſ` and `K`.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@(?:[a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email regex compiles")
});

// Leading `+`, 7 to 15 digits, at most one space between digits.
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+(?:[0-9] ?){6,14}[0-9]$").expect("phone regex compiles"));

/// Whether `value` is a well-formed email address.
///
/// ```rust
/// use mediconnect::rule::is_valid_email;
///
/// assert!(is_valid_email("admin@hospital.com"));
/// assert!(!is_valid_email("admin@hospital"));
/// assert!(!is_valid_email("ad..min@hospital.com"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    let local_dots = PredicateExt::<str>::and(
        PredicateExt::<str>::not(predicate::starts_with(".")),
        PredicateExt::<str>::not(predicate::contains("..")),
    );
    PredicateExt::<str>::and(local_dots, predicate::matches(&EMAIL)).check(value)
}

/// Whether `value` is an international phone number.
///
/// ```rust
/// use mediconnect::rule::is_valid_phone;
///
/// assert!(is_valid_phone("+1 234 567 890"));
/// assert!(!is_valid_phone("1234567890"));
/// ```
pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

/// Email format rule.
pub fn email(message: &'static str) -> FieldRule {
    FieldRule::new(is_valid_email, message)
}

/// International phone rule.
pub fn phone(message: &'static str) -> FieldRule {
    FieldRule::new(is_valid_phone, message)
}

/// Calendar date rule, `YYYY-MM-DD`, rejecting impossible dates such as
/// `2025-02-30`.
pub fn date(message: &'static str) -> FieldRule {
    FieldRule::new(
        |value: &str| NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok(),
        message,
    )
}

/// Password requirements.
///
/// `strict()` is the patient signup policy; `basic()` the one every other
/// form uses. Each requirement becomes its own rule so the user sees the
/// first unmet one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_len: usize,
    /// At least one ASCII uppercase letter.
    pub require_uppercase: bool,
    /// At least one ASCII digit.
    pub require_digit: bool,
    /// At least one of these characters, when set.
    pub symbols: Option<String>,
}

impl PasswordPolicy {
    /// Length 8, uppercase, digit and one of `!@#$%^&*`.
    pub fn strict() -> Self {
        Self {
            min_len: 8,
            require_uppercase: true,
            require_digit: true,
            symbols: Some("!@#$%^&*".to_string()),
        }
    }

    /// Length 8, nothing else.
    pub fn basic() -> Self {
        Self {
            min_len: 8,
            require_uppercase: false,
            require_digit: false,
            symbols: None,
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::basic()
    }
}

/// The ordered rules enforcing `policy`.
pub fn password(policy: &PasswordPolicy) -> Vec<FieldRule> {
    let mut rules = vec![super::min_len(
        policy.min_len,
        format!("Password must be at least {} characters", policy.min_len),
    )];
    if policy.require_uppercase {
        rules.push(FieldRule::new(
            predicate::any_char(|c: char| c.is_ascii_uppercase()),
            "Must contain at least one uppercase letter",
        ));
    }
    if policy.require_digit {
        rules.push(FieldRule::new(
            predicate::any_char(|c: char| c.is_ascii_digit()),
            "Must contain at least one number",
        ));
    }
    if let Some(symbols) = policy.symbols.clone().filter(|s| !s.is_empty()) {
        rules.push(FieldRule::new(
            predicate::any_char(move |c: char| symbols.contains(c)),
            "Must contain at least one special character",
        ));
    }
    rules
}
