//! Error types for the contact form workflow.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when talking to the email relay.
#[derive(Error, Debug)]
pub enum RelayError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Relay returned an error status code
    #[error("Relay error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to serialize the request body
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Relay rejected the credentials (bad public key, API disabled for the origin)
    #[error("Relay rejected credentials: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Relay rejected the payload (unknown service/template, bad params)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors returned by a single submit attempt.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// A field failed validation; the relay was not called.
    #[error("{0}")]
    Validation(ValidationError),

    /// Relay credentials are not configured.
    #[error("Relay not configured: {0}")]
    Configuration(#[from] ConfigError),

    /// The relay call was rejected or failed.
    #[error("Relay call failed: {0}")]
    Transport(#[from] RelayError),

    /// A submission is already in flight.
    #[error("A submission is already in progress")]
    Busy,
}

impl SubmitError {
    /// Whether the failure moved the form into the `error` status.
    ///
    /// Validation and busy rejections never touch the status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Transport(_))
    }
}

/// Convenience type alias for Results with RelayError
pub type RelayResult<T> = Result<T, RelayError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;
