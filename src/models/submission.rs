//! ContactSubmission model holding the visitor's in-progress form input.

use crate::domain::ContactField;
use serde::{Deserialize, Serialize};

/// The raw contents of the contact form.
///
/// Values are kept exactly as typed; validation happens on submit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactSubmission {
    /// Visitor's name (required)
    pub name: String,

    /// Visitor's email address (required)
    pub email: String,

    /// Visitor's phone number (optional, empty when not given)
    pub phone: String,

    /// Message body (required)
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from the four field values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    /// Read a single field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    /// Overwrite a single field.
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|f| self.get(f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_fields() {
        let mut submission = ContactSubmission::default();
        submission.set(ContactField::Phone, "555-123-4567".to_string());
        assert_eq!(submission.get(ContactField::Phone), "555-123-4567");
        assert_eq!(submission.phone, "555-123-4567");
        assert!(!submission.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut submission =
            ContactSubmission::new("John Doe", "john@example.com", "", "Hello there");
        submission.clear();
        assert!(submission.is_empty());
    }

    #[test]
    fn test_deserialize_with_missing_phone() {
        let json = r#"{"name": "Jane", "email": "jane@example.com", "message": "Hi"}"#;
        let submission: ContactSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.phone, "");
        assert_eq!(submission.name, "Jane");
    }
}
