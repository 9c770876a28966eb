use std::fmt;

use super::Validatable;

/// A field that failed validation, with the message of its first failing rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field_name: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_name, self.message)
    }
}

/// Result of validating one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, in field order.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// The message for `field_name`, if that field failed.
    pub fn error_for(&self, field_name: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field_name == field_name)
            .map(|e| e.message.as_str())
    }

    /// Show this result's message for `field_name` on `widget`, clearing any
    /// previous error when the field passed.
    pub fn apply_to<W: Validatable>(&self, field_name: &str, widget: &mut W) {
        widget.set_validation_error(self.error_for(field_name).map(str::to_string));
    }
}
