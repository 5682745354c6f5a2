//! Field validation for the contact form.

use crate::domain::{ContactField, EmailAddress, PhoneNumber, ValidationError};
use crate::models::ContactSubmission;
use std::collections::HashMap;

/// Per-field validation errors.
///
/// A field without an entry has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: HashMap<ContactField, ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The error recorded for `field`, if any.
    pub fn get(&self, field: ContactField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// The inline message for `field`, or an empty string when it is valid.
    pub fn message(&self, field: ContactField) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }

    /// Record an error under the field it belongs to, replacing any previous one.
    pub fn set(&mut self, error: ValidationError) {
        self.errors.insert(error.field(), error);
    }

    /// Clear the error for `field`. Returns whether there was one.
    pub fn clear(&mut self, field: ContactField) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    /// The error a submit attempt reports, following form order:
    /// name, email, phone, message.
    pub fn first(&self) -> Option<&ValidationError> {
        self.iter().next()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        ContactField::ALL
            .into_iter()
            .filter_map(move |field| self.errors.get(&field))
    }
}

/// Validate every field of a submission.
///
/// Pure: computes all errors at once. Callers that surface a single error
/// use [`ValidationErrors::first`].
pub fn validate(submission: &ContactSubmission) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if submission.name.trim().is_empty() {
        errors.set(ValidationError::MissingField(ContactField::Name));
    }

    if let Err(e) = validate_email(&submission.email) {
        errors.set(e);
    }

    if let Err(e) = validate_phone(&submission.phone) {
        errors.set(e);
    }

    if submission.message.trim().is_empty() {
        errors.set(ValidationError::MissingField(ContactField::Message));
    }

    errors
}

/// Email is required and must have the `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    EmailAddress::new(email).map(|_| ())
}

/// Phone is optional: empty passes, anything else must be a valid number.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Ok(());
    }
    PhoneNumber::new(phone).map(|_| ())
}
