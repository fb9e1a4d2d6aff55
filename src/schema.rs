//! Form schemas
//!
//! A [`FormSchema`] is the immutable declaration of one form: its fields in
//! display order, each with a semantic kind and ordered rules, plus the
//! cross-field rules. Schemas are checked once, when built, so a rule that
//! names a missing field is a startup error rather than a silent gap.
//!
//! ```rust
//! use mediconnect::{FieldDef, FormSchema, rule, rule::CrossFieldRule};
//!
//! let schema = FormSchema::builder("staff_invite")
//!     .field(FieldDef::text("name").rule(rule::min_len(3, "Name must be at least 3 characters")))
//!     .field(FieldDef::email("email", "Invalid email address"))
//!     .field(FieldDef::email("confirmEmail", "Invalid email address"))
//!     .cross(CrossFieldRule::fields_match("email", "confirmEmail", "Emails do not match"))
//!     .build()
//!     .expect("schema is consistent");
//!
//! assert_eq!(schema.field_names().collect::<Vec<_>>(), ["name", "email", "confirmEmail"]);
//! ```

use std::collections::BTreeSet;

use crate::error::SchemaError;
use crate::rule::{self, CrossFieldRule, FieldRule, PasswordPolicy};

/// Semantic type of a field. Decides how a passing raw value is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Email address.
    Email,
    /// International phone number.
    Phone,
    /// Secret; redacted in logs and serialized output.
    Password,
    /// One of a fixed set of tokens.
    Choice(&'static [&'static str]),
    /// Calendar date, `YYYY-MM-DD`.
    Date,
}

/// One field: name, kind and ordered rules.
#[derive(Debug)]
pub struct FieldDef {
    name: &'static str,
    kind: FieldKind,
    rules: Vec<FieldRule>,
}

impl FieldDef {
    /// A field with no rules yet.
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            rules: Vec::new(),
        }
    }

    /// Free text field.
    pub fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Email field carrying the email format rule.
    pub fn email(name: &'static str, message: &'static str) -> Self {
        Self::new(name, FieldKind::Email).rule(rule::email(message))
    }

    /// Phone field carrying the international phone rule.
    pub fn phone(name: &'static str, message: &'static str) -> Self {
        Self::new(name, FieldKind::Phone).rule(rule::phone(message))
    }

    /// Password field enforcing `policy`.
    pub fn password(name: &'static str, policy: &PasswordPolicy) -> Self {
        Self::new(name, FieldKind::Password).rules(rule::password(policy))
    }

    /// Password field with no rules of its own, such as a confirmation box.
    pub fn password_confirmation(name: &'static str) -> Self {
        Self::new(name, FieldKind::Password)
    }

    /// Enum field; membership in `allowed` is checked first.
    pub fn choice(name: &'static str, allowed: &'static [&'static str]) -> Self {
        let message = format!("Expected one of: {}", allowed.join(", "));
        Self::new(name, FieldKind::Choice(allowed)).rule(rule::one_of(allowed, message))
    }

    /// Date field carrying the calendar date rule.
    pub fn date(name: &'static str, message: &'static str) -> Self {
        Self::new(name, FieldKind::Date).rule(rule::date(message))
    }

    /// Append a rule.
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append several rules, keeping their order.
    pub fn rules(mut self, rules: impl IntoIterator<Item = FieldRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Rules in evaluation order.
    pub fn field_rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// First failing rule's message for `value`.
    pub fn check(&self, value: &str) -> Option<&str> {
        rule::first_failure(&self.rules, value)
    }
}

/// Immutable, checked declaration of a form.
#[derive(Debug)]
pub struct FormSchema {
    name: &'static str,
    fields: Vec<FieldDef>,
    cross: Vec<CrossFieldRule>,
}

impl FormSchema {
    /// Start declaring a form called `name`.
    pub fn builder(name: &'static str) -> FormSchemaBuilder {
        FormSchemaBuilder {
            name,
            fields: Vec::new(),
            cross: Vec::new(),
        }
    }

    /// Form name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldDef::name)
    }

    /// Look up a field definition.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Cross-field rules in declaration order.
    pub fn cross_rules(&self) -> &[CrossFieldRule] {
        &self.cross
    }
}

/// Collects fields and cross-field rules, then checks them in [`build`](Self::build).
#[derive(Debug)]
pub struct FormSchemaBuilder {
    name: &'static str,
    fields: Vec<FieldDef>,
    cross: Vec<CrossFieldRule>,
}

impl FormSchemaBuilder {
    /// Append a field.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a cross-field rule.
    pub fn cross(mut self, rule: CrossFieldRule) -> Self {
        self.cross.push(rule);
        self
    }

    /// Check the declaration and freeze it.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::DuplicateField`] when two fields share a name.
    /// - [`SchemaError::EmptyChoices`] when an enum field allows nothing.
    /// - [`SchemaError::UnknownField`] when a cross-field rule reads or
    ///   targets a field that was not declared.
    pub fn build(self) -> Result<FormSchema, SchemaError> {
        let mut seen = BTreeSet::new();
        for field in &self.fields {
            if !seen.insert(field.name) {
                return Err(SchemaError::DuplicateField {
                    form: self.name,
                    field: field.name,
                });
            }
            if let FieldKind::Choice(allowed) = field.kind {
                if allowed.is_empty() {
                    return Err(SchemaError::EmptyChoices {
                        form: self.name,
                        field: field.name,
                    });
                }
            }
        }

        for rule in &self.cross {
            let referenced = rule.reads().iter().copied().chain([rule.target()]);
            for field in referenced {
                if !seen.contains(field) {
                    return Err(SchemaError::UnknownField {
                        form: self.name,
                        rule: rule.name(),
                        field,
                    });
                }
            }
        }

        Ok(FormSchema {
            name: self.name,
            fields: self.fields,
            cross: self.cross,
        })
    }
}
