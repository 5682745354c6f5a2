//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the contact form's fields.
//! Email addresses and phone numbers are validated at construction time, so
//! a value object in hand is always well-formed.

pub mod email;
pub mod errors;
pub mod field;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::ContactField;
pub use phone::{PhoneNumber, MIN_PHONE_DIGITS};
