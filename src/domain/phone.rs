//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Fewest digits a phone number may carry once formatting is stripped.
pub const MIN_PHONE_DIGITS: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// Accepts digits plus whitespace, `+`, `-`, `(` and `)` as formatting, and
/// requires at least [`MIN_PHONE_DIGITS`] digits.
///
/// # Example
///
/// ```
/// use portfolio_contact::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "+1 (555) 123-4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check the format without allocating a value object.
    ///
    /// The empty string is not a phone number; callers treating the field as
    /// optional must skip validation for it.
    pub fn is_valid(phone: &str) -> bool {
        if phone.is_empty() {
            return false;
        }

        let allowed = phone.chars().all(|c| {
            c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')')
        });

        allowed && Self::count_digits(phone) >= MIN_PHONE_DIGITS
    }

    fn count_digits(phone: &str) -> usize {
        phone.chars().filter(|c| c.is_ascii_digit()).count()
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
