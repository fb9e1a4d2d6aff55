//! String predicates
//!
//! Lengths count characters, not bytes: `"José"` has length 4.

use regex::Regex;

use super::combinators::Predicate;

/// Predicate that checks string length, in characters, is at least a minimum.
#[derive(Clone, Copy, Debug)]
pub struct LenMin(pub usize);

impl Predicate<str> for LenMin {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().count() >= self.0
    }
}

/// Create a predicate that checks if string length is at least min.
///
/// ```rust
/// use mediconnect::predicate::*;
///
/// assert!(len_min(3).check("Joe"));
/// assert!(!len_min(3).check("Jo"));
/// ```
pub fn len_min(min: usize) -> LenMin {
    LenMin(min)
}

/// Predicate that checks if string starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

/// Create a predicate that checks if string starts with prefix.
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks if string contains a substring.
#[derive(Clone, Debug)]
pub struct Contains<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for Contains<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.contains(self.0.as_ref())
    }
}

/// Create a predicate that checks if string contains substring.
pub fn contains<S: AsRef<str> + Send + Sync>(substring: S) -> Contains<S> {
    Contains(substring)
}

/// Predicate that checks if any character satisfies a predicate.
#[derive(Clone, Copy, Debug)]
pub struct AnyChar<F>(pub F);

impl<F: Fn(char) -> bool + Send + Sync> Predicate<str> for AnyChar<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().any(&self.0)
    }
}

/// Create a predicate that checks if any character satisfies a condition.
///
/// ```rust
/// use mediconnect::predicate::*;
///
/// assert!(any_char(|c: char| c.is_ascii_uppercase()).check("Abcdef1!"));
/// assert!(!any_char(|c: char| c.is_ascii_digit()).check("abcdefgh"));
/// ```
pub fn any_char<F: Fn(char) -> bool + Send + Sync>(f: F) -> AnyChar<F> {
    AnyChar(f)
}

/// Predicate that checks the value is one of a fixed set of tokens.
#[derive(Clone, Copy, Debug)]
pub struct OneOf(pub &'static [&'static str]);

impl Predicate<str> for OneOf {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.contains(&value)
    }
}

/// Create a predicate that checks membership in `allowed`. Matching is exact.
///
/// ```rust
/// use mediconnect::predicate::*;
///
/// let gender = one_of(&["male", "female", "other"]);
/// assert!(gender.check("other"));
/// assert!(!gender.check("Other"));
/// ```
pub fn one_of(allowed: &'static [&'static str]) -> OneOf {
    OneOf(allowed)
}

/// Predicate that checks the whole value against a compiled regex.
///
/// The regex should be anchored; the predicate does not add anchors.
#[derive(Clone, Copy, Debug)]
pub struct Matches(pub &'static Regex);

impl Predicate<str> for Matches {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// Create a predicate backed by a `'static` regex, usually a `Lazy` static.
pub fn matches(regex: &'static Regex) -> Matches {
    Matches(regex)
}
