//! Contact submission workflow.
//!
//! Validation rules and the stateful form that applies them before handing
//! a message to the relay.

pub mod contact_form;
pub mod validation;

pub use contact_form::{ContactForm, FormSettings};
pub use validation::{validate, validate_email, validate_phone, ValidationErrors};
