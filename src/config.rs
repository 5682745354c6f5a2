//! Configuration management for the contact form.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file. Relay secrets are allowed to be
//! absent at load time: a form without them still renders and validates, and
//! only fails when a visitor actually submits.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use crate::models::RelayCredentials;
use std::env;
use std::time::Duration;

/// Default EmailJS API host.
pub const DEFAULT_RELAY_API_URL: &str = "https://api.emailjs.com";

/// Default time a success or error banner stays up before the form resets.
pub const DEFAULT_STATUS_RESET_MS: u64 = 5000;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

/// The three relay secrets, each possibly missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelaySettings {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

impl RelaySettings {
    /// Build settings with all three secrets present.
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: Some(service_id.into()),
            template_id: Some(template_id.into()),
            public_key: Some(public_key.into()),
        }
    }

    /// Resolve the credentials needed for a relay call.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` naming the first secret that is
    /// absent or blank.
    pub fn credentials(&self) -> ConfigResult<RelayCredentials> {
        Ok(RelayCredentials {
            service_id: Self::require(&self.service_id, SERVICE_ID_VAR)?,
            template_id: Self::require(&self.template_id, TEMPLATE_ID_VAR)?,
            public_key: Self::require(&self.public_key, PUBLIC_KEY_VAR)?,
        })
    }

    fn require(value: &Option<String>, var: &str) -> ConfigResult<String> {
        value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| ConfigError::MissingVar(var.to_string()))
    }
}

/// Configuration for the contact form.
#[derive(Debug, Clone)]
pub struct Config {
    /// EmailJS API base URL
    pub relay_api_url: String,

    /// Relay secrets (checked at submit time)
    pub relay: RelaySettings,

    /// Address the relay forwards messages to
    pub recipient_email: String,

    /// HTTP request timeout in seconds (default: the HTTP client's own)
    pub request_timeout: Option<u64>,

    /// How long the success/error banner stays up, in milliseconds (default: 5000)
    pub status_reset_ms: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACT_RECIPIENT_EMAIL`: Address messages are delivered to
    ///
    /// Optional environment variables:
    /// - `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY`: Relay secrets
    /// - `RELAY_API_URL`: Relay base URL (default: https://api.emailjs.com)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: none)
    /// - `STATUS_RESET_MS`: Banner display time in milliseconds (default: 5000)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let recipient_email = env::var("CONTACT_RECIPIENT_EMAIL")
            .map_err(|_| ConfigError::MissingVar("CONTACT_RECIPIENT_EMAIL".to_string()))?;

        if !EmailAddress::is_valid(&recipient_email) {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_RECIPIENT_EMAIL".to_string(),
                reason: format!("Not a valid email address: {}", recipient_email),
            });
        }

        let relay_api_url =
            env::var("RELAY_API_URL").unwrap_or_else(|_| DEFAULT_RELAY_API_URL.to_string());

        if !relay_api_url.starts_with("http://") && !relay_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RELAY_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let relay = RelaySettings {
            service_id: Self::optional_var(SERVICE_ID_VAR),
            template_id: Self::optional_var(TEMPLATE_ID_VAR),
            public_key: Self::optional_var(PUBLIC_KEY_VAR),
        };

        let request_timeout = match env::var("REQUEST_TIMEOUT") {
            Ok(_) => Some(Self::parse_env_u64("REQUEST_TIMEOUT", 0)?),
            Err(_) => None,
        };

        if request_timeout == Some(0) {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let status_reset_ms = Self::parse_env_u64("STATUS_RESET_MS", DEFAULT_STATUS_RESET_MS)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            relay_api_url,
            relay,
            recipient_email,
            request_timeout,
            status_reset_ms,
            log_level,
        })
    }

    /// The status reset delay as a `Duration`.
    pub fn status_reset(&self) -> Duration {
        Duration::from_millis(self.status_reset_ms)
    }

    /// Read an optional variable, treating blank values as absent.
    fn optional_var(var_name: &str) -> Option<String> {
        env::var(var_name).ok().filter(|v| !v.trim().is_empty())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            relay_api_url: DEFAULT_RELAY_API_URL.to_string(),
            relay: RelaySettings::default(),
            recipient_email: String::new(),
            request_timeout: None,
            status_reset_ms: DEFAULT_STATUS_RESET_MS,
            log_level: "error".to_string(),
        }
    }
}
