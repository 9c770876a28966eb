//! Validator builder for fluent validation API.

use regex::Regex;

use super::result::{FieldError, ValidationResult};
use super::validatable::Validatable;

type Rule = Box<dyn Fn(&str) -> bool>;

struct FieldEntry {
    name: String,
    value: String,
    rules: Vec<(Rule, String)>,
}

impl FieldEntry {
    /// Message of the first failing rule.
    fn first_failure(&self) -> Option<&str> {
        self.rules
            .iter()
            .find(|(rule, _)| !rule(self.value.as_str()))
            .map(|(_, msg)| msg.as_str())
    }
}

/// Builder for validating multiple form fields.
///
/// Fields are checked in the order they were added; each field reports only
/// its first failing rule.
#[derive(Default)]
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start validating `value` under `name`.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            entry: FieldEntry {
                name: name.into(),
                value: value.into(),
                rules: Vec::new(),
            },
        }
    }

    /// Start validating the current value of `widget` under `name`.
    pub fn widget<W: Validatable>(self, name: impl Into<String>, widget: &W) -> FieldBuilder {
        self.field(name, widget.validation_value())
    }

    pub fn validate(self) -> ValidationResult {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|field| {
                field.first_failure().map(|message| FieldError {
                    field_name: field.name.clone(),
                    message: message.to_string(),
                })
            })
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            log::debug!("validation failed for {} field(s)", errors.len());
            ValidationResult::Invalid(errors)
        }
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    entry: FieldEntry,
}

impl FieldBuilder {
    /// Add a custom rule; `f` returns `true` when the value is acceptable.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.entry.rules.push((Box::new(f), msg.into()));
        self
    }

    /// Require a value that is not empty after trimming whitespace.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match `pattern`.
    pub fn pattern(self, pattern: Regex, msg: impl Into<String>) -> Self {
        self.rule(move |v| pattern.is_match(v), msg)
    }

    /// Require a well-formed email address. Empty values pass; combine with
    /// [`required`](Self::required) to reject them.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| v.is_empty() || email_address::EmailAddress::is_valid(v),
            msg,
        )
    }

    pub fn equals(self, other: impl Into<String>, msg: impl Into<String>) -> Self {
        let other = other.into();
        self.rule(move |v| v == other, msg)
    }

    pub fn contains(self, substr: impl Into<String>, msg: impl Into<String>) -> Self {
        let substr = substr.into();
        self.rule(move |v| v.contains(&substr), msg)
    }

    /// Continue to the next field.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        self.finalize().field(name, value)
    }

    /// Continue to the next field, reading its value from `widget`.
    pub fn widget<W: Validatable>(self, name: impl Into<String>, widget: &W) -> FieldBuilder {
        self.finalize().widget(name, widget)
    }

    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    fn finalize(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(self.entry);
        validator
    }
}
