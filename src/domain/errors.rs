//! Field validation errors.

use super::field::ContactField;
use std::fmt;

/// Errors that can occur while validating contact form fields.
///
/// `Display` renders the message shown inline next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is blank.
    MissingField(ContactField),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl ValidationError {
    /// The form field this error belongs to.
    pub fn field(&self) -> ContactField {
        match self {
            Self::MissingField(field) => *field,
            Self::InvalidEmail(_) => ContactField::Email,
            Self::InvalidPhone(_) => ContactField::Phone,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Please fill in your {}", field),
            Self::InvalidEmail(_) => write!(f, "Please enter a valid email address"),
            Self::InvalidPhone(_) => write!(
                f,
                "Please enter a valid phone number (at least 10 digits)"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
