use super::{FormData, FormErrors};
use crate::content::FlexibleContent;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{7,}$").expect("valid phone pattern"));

/// The outcome of validating a form against its content document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    pub errors: FormErrors,
    pub is_valid: bool,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Validates the current field values against every visible `input` component.
///
/// Each field gets at most one message. A blank required value (empty or
/// whitespace only) gets the required message. Otherwise any non-empty value is
/// checked against its `email` or `tel` format, whether or not it is required.
///
/// `required` and `input_type` are read key by key from the raw properties, so an
/// ill-typed sibling key never disables validation.
pub fn validate_form(form_data: &FormData, content: &FlexibleContent) -> Validation {
    let mut errors = FormErrors::new();

    let inputs = content
        .components()
        .filter(|c| c.visible && c.type_name == "input");
    for component in inputs {
        let required = component
            .properties
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let value = form_data
            .get(&component.id)
            .map(String::as_str)
            .unwrap_or("");

        let message = if required && value.trim().is_empty() {
            Some(REQUIRED_MESSAGE)
        } else if value.is_empty() {
            None
        } else {
            match component.property_str("input_type") {
                Some("email") if !is_valid_email(value) => Some(EMAIL_MESSAGE),
                Some("tel") if !is_valid_phone(value) => Some(PHONE_MESSAGE),
                _ => None,
            }
        };

        if let Some(message) = message {
            errors.insert(component.id.clone(), message.to_string());
        }
    }

    tracing::debug!("Form validation produced {} error(s)", errors.len());
    Validation {
        is_valid: errors.is_empty(),
        errors,
    }
}
