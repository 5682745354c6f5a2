//! Portfolio Contact - the contact form workflow of a personal portfolio site.
//!
//! Visitors fill in name, email, an optional phone number and a message. The
//! form validates the input locally and forwards it to the site owner through
//! the EmailJS relay, reporting success or failure without losing the form.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for email addresses and phone numbers
//! - **models**: Form input, submission status, and relay payloads
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the EmailJS relay
//! - **timer**: Cancellable one-shot timer for the status reset
//! - **workflow**: Validation rules and the stateful contact form
//! - **metrics**: In-process counters for relay calls and submissions

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod timer;
pub mod workflow;

// Re-export commonly used types
pub use client::{AsyncRelayClient, AsyncRelayClientImpl, RelayClient};
pub use config::{Config, RelaySettings};
pub use domain::{ContactField, EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, RelayError, SubmitError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ContactSubmission, RelayCredentials, SubmissionStatus, TemplateParams};
pub use timer::ScopedTimer;
pub use workflow::{validate, ContactForm, FormSettings, ValidationErrors};
