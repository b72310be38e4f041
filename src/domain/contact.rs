//! Buyer contact details and the per-field validators that guard them.
//!
//! Every validator is a plain function returning `Result<(), FieldError>`, so the
//! form can compose them without any registration step.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub const PHONE_MIN_LENGTH: usize = 6;
pub const PHONE_MAX_LENGTH: usize = 14;

static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]*$").expect("Invalid address regex pattern"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("Invalid email regex pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Required,
    MinLength,
    MaxLength,
    Pattern,
}

/// Why a single field was rejected, with the message shown next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: FieldErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub type FieldResult = Result<(), FieldError>;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_full_name(value: &str) -> FieldResult {
    if is_blank(value) {
        return Err(FieldError::new(
            FieldErrorKind::Required,
            "This field is required",
        ));
    }
    Ok(())
}

/// Required, between 6 and 14 characters inclusive.
pub fn validate_phone(value: &str) -> FieldResult {
    if is_blank(value) {
        return Err(FieldError::new(FieldErrorKind::Required, "Required"));
    }
    let length = value.chars().count();
    if length < PHONE_MIN_LENGTH {
        Err(FieldError::new(
            FieldErrorKind::MinLength,
            "At least 6 digits",
        ))
    } else if length > PHONE_MAX_LENGTH {
        Err(FieldError::new(
            FieldErrorKind::MaxLength,
            "At most 14 digits",
        ))
    } else {
        Ok(())
    }
}

pub fn validate_email(value: &str) -> FieldResult {
    if is_blank(value) {
        return Err(FieldError::new(
            FieldErrorKind::Required,
            "This email is required",
        ));
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(FieldError::new(
            FieldErrorKind::Pattern,
            "Enter a valid email",
        ));
    }
    Ok(())
}

/// Optional; letters and digits only when present.
pub fn validate_address(value: &str) -> FieldResult {
    if ADDRESS_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::new(
            FieldErrorKind::Pattern,
            "Only letters and digits are accepted",
        ))
    }
}

/// Validated contact details. Only produced by a successful form validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
