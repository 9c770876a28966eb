//! Tests for the form validator.

use datagrid::components::{Input, InputMessage};
use datagrid::validation::{FieldError, ValidationResult, Validator};
use regex::Regex;

#[test]
fn test_all_fields_valid() {
    let result = Validator::new()
        .field("username", "alice")
        .required("required")
        .field("password", "hunter22")
        .min_length(6, "too short")
        .validate();
    assert_eq!(result, ValidationResult::Valid);
    assert!(result.errors().is_empty());
}

#[test]
fn test_first_failing_rule_per_field() {
    let result = Validator::new()
        .field("code", "")
        .required("Code is required")
        .min_length(4, "Code is too short")
        .validate();

    assert_eq!(
        result.errors(),
        [FieldError {
            field_name: "code".to_string(),
            message: "Code is required".to_string(),
        }]
    );
}

#[test]
fn test_errors_keep_field_order() {
    let result = Validator::new()
        .field("a", "")
        .required("a missing")
        .field("b", "ok")
        .required("b missing")
        .field("c", "")
        .required("c missing")
        .validate();

    let names: Vec<&str> = result.errors().iter().map(|e| e.field_name.as_str()).collect();
    assert_eq!(names, ["a", "c"]);
    assert_eq!(result.first_error().map(|e| e.message.as_str()), Some("a missing"));
}

#[test]
fn test_required_rejects_whitespace() {
    let result = Validator::new().field("name", "   ").required("required").validate();
    assert!(result.is_invalid());
}

#[test]
fn test_length_counts_characters() {
    let result = Validator::new()
        .field("name", "ééé")
        .max_length(3, "too long")
        .min_length(3, "too short")
        .validate();
    assert!(result.is_valid());
}

#[test]
fn test_email_rule() {
    let check = |value: &str| {
        Validator::new()
            .field("email", value)
            .email("bad email")
            .validate()
            .is_valid()
    };
    assert!(check("user@example.com"));
    assert!(check(""));
    assert!(!check("user@"));
    assert!(!check("not an email"));
}

#[test]
fn test_pattern_equals_and_custom_rule() {
    let digits = Regex::new(r"^\d+$").unwrap();
    let result = Validator::new()
        .field("phone", "98563x")
        .pattern(digits, "digits only")
        .field("confirm", "abc")
        .equals("abd", "does not match")
        .field("even", "3")
        .rule(|v| v.parse::<u32>().is_ok_and(|n| n % 2 == 0), "must be even")
        .validate();

    assert_eq!(result.error_for("phone"), Some("digits only"));
    assert_eq!(result.error_for("confirm"), Some("does not match"));
    assert_eq!(result.error_for("even"), Some("must be even"));
}

#[test]
fn test_widget_values_and_apply_to() {
    let mut username = Input::new().helper_text("This will be public");
    let mut email = Input::new().with_value("someone@mail.com");

    let result = Validator::new()
        .widget("username", &username)
        .required("Username is required")
        .widget("email", &email)
        .contains("@", "Enter a valid email")
        .validate();

    result.apply_to("username", &mut username);
    result.apply_to("email", &mut email);
    assert_eq!(
        username.message(),
        Some(InputMessage::Error("Username is required"))
    );
    assert!(!email.is_invalid());

    // A later passing run clears the shown error
    username.set_value("alice");
    let result = Validator::new()
        .widget("username", &username)
        .required("Username is required")
        .validate();
    result.apply_to("username", &mut username);
    assert_eq!(username.message(), Some(InputMessage::Helper("This will be public")));
}

#[test]
fn test_field_error_display() {
    let error = FieldError {
        field_name: "email".to_string(),
        message: "Enter a valid email".to_string(),
    };
    assert_eq!(error.to_string(), "email: Enter a valid email");
}
