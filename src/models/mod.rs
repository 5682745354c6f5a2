//! Data models for the contact form.
//!
//! This module contains the form's input, its submission status, and the
//! payloads sent to the email relay.

pub mod relay;
pub mod status;
pub mod submission;

pub use relay::{RelayCredentials, SendEmailRequest, TemplateParams, PHONE_NOT_PROVIDED};
pub use status::{SubmissionStatus, ERROR_BANNER, SUCCESS_BANNER};
pub use submission::ContactSubmission;
