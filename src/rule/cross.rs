//! Cross-field rules: checks spanning several fields, reported on one.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

type Check = Box<dyn Fn(&FormValues<'_>) -> bool + Send + Sync>;

/// Read-only view of a form's raw values.
#[derive(Debug, Clone, Copy)]
pub struct FormValues<'a> {
    values: &'a BTreeMap<&'static str, String>,
}

impl<'a> FormValues<'a> {
    pub(crate) fn new(values: &'a BTreeMap<&'static str, String>) -> Self {
        Self { values }
    }

    /// Raw value of `field`, `None` when the user never supplied one.
    pub fn get(&self, field: &str) -> Option<&'a str> {
        self.values.get(field).map(String::as_str)
    }
}

/// A check over the whole form whose failure lands on one field.
pub struct CrossFieldRule {
    name: &'static str,
    reads: Vec<&'static str>,
    target: &'static str,
    message: Cow<'static, str>,
    check: Check,
}

impl CrossFieldRule {
    /// A rule named `name` that reads `reads` and reports on `target`.
    ///
    /// Every field in `reads` and the `target` must exist in the schema the
    /// rule is added to; the schema builder enforces this.
    pub fn new<F>(
        name: &'static str,
        reads: &[&'static str],
        target: &'static str,
        message: impl Into<Cow<'static, str>>,
        check: F,
    ) -> Self
    where
        F: Fn(&FormValues<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            reads: reads.to_vec(),
            target,
            message: message.into(),
            check: Box::new(check),
        }
    }

    /// `confirm` must equal `original`; failures land on `confirm`.
    ///
    /// Two absent values count as equal, one absent and one present as
    /// unequal.
    ///
    /// ```rust
    /// use mediconnect::rule::CrossFieldRule;
    ///
    /// let rule = CrossFieldRule::fields_match("password", "confirmPassword", "Passwords do not match");
    /// assert_eq!(rule.target(), "confirmPassword");
    /// assert_eq!(rule.reads(), &["password", "confirmPassword"]);
    /// ```
    pub fn fields_match(
        original: &'static str,
        confirm: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(
            "fields_match",
            &[original, confirm],
            confirm,
            message,
            move |values| values.get(original) == values.get(confirm),
        )
    }

    /// Rule name, used in schema errors and logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields the rule reads.
    pub fn reads(&self) -> &[&'static str] {
        &self.reads
    }

    /// Field the failure is reported on.
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// `None` when the form satisfies the rule, the message when it does not.
    pub fn check(&self, values: &FormValues<'_>) -> Option<&str> {
        if (self.check)(values) {
            None
        } else {
            Some(&*self.message)
        }
    }
}

impl fmt::Debug for CrossFieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossFieldRule")
            .field("name", &self.name)
            .field("reads", &self.reads)
            .field("target", &self.target)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
        pairs
            .iter()
            .map(|(field, value)| (*field, value.to_string()))
            .collect()
    }

    #[test]
    fn fields_match_passes_on_equal_values() {
        let rule =
            CrossFieldRule::fields_match("password", "confirmPassword", "Passwords do not match");
        let raw = values(&[("password", "Abcdef1!"), ("confirmPassword", "Abcdef1!")]);
        assert_eq!(rule.check(&FormValues::new(&raw)), None);
    }

    #[test]
    fn fields_match_fails_on_difference() {
        let rule =
            CrossFieldRule::fields_match("password", "confirmPassword", "Passwords do not match");
        let raw = values(&[("password", "Abcdef1!"), ("confirmPassword", "Abcdef1?")]);
        assert_eq!(
            rule.check(&FormValues::new(&raw)),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn fields_match_treats_missing_as_distinct_from_present() {
        let rule =
            CrossFieldRule::fields_match("password", "confirmPassword", "Passwords do not match");
        let raw = values(&[("password", "Abcdef1!")]);
        assert!(rule.check(&FormValues::new(&raw)).is_some());

        let empty = values(&[]);
        assert_eq!(rule.check(&FormValues::new(&empty)), None);
    }

    #[test]
    fn custom_rule_reads_any_fields() {
        let rule = CrossFieldRule::new(
            "contact_differs",
            &["hospitalName", "contactPerson"],
            "contactPerson",
            "Contact person cannot be the hospital",
            |values| values.get("hospitalName") != values.get("contactPerson"),
        );
        let raw = values(&[("hospitalName", "City Care"), ("contactPerson", "City Care")]);
        assert_eq!(
            rule.check(&FormValues::new(&raw)),
            Some("Contact person cannot be the hospital")
        );
        assert_eq!(rule.name(), "contact_differs");
    }
}
