//! HTTP client for the EmailJS relay.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client sends a single request per message
//! and maps relay failures onto `RelayError`.
//!
//! EmailJS refuses calls that do not come from a browser unless the account has
//! "API access from non-browser environments" enabled; such refusals surface as
//! `RelayError::Unauthorized`.

mod async_wrapper;
pub use async_wrapper::{AsyncRelayClient, AsyncRelayClientImpl};

use crate::config::Config;
use crate::error::{RelayError, RelayResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{RelayCredentials, SendEmailRequest, TemplateParams};
use std::sync::Arc;
use std::time::Duration;

/// Path of the EmailJS send endpoint, relative to the API base URL.
pub const SEND_PATH: &str = "/api/v1.0/email/send";

/// HTTP client for the EmailJS relay.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct RelayClient {
    /// Base URL for the relay API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl RelayClient {
    /// Create a new RelayClient from configuration.
    ///
    /// Without `request_timeout` the agent keeps ureq's own defaults.
    pub fn new(config: &Config) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(secs) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Self {
            base_url: config.relay_api_url.clone(),
            agent: Arc::new(builder.build()),
            metrics: Metrics::new(),
        }
    }

    /// Create a RelayClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            agent: Arc::new(ureq::AgentBuilder::new().build()),
            metrics: Metrics::new(),
        }
    }

    /// Record HTTP traffic into an existing collector instead of a private one.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with a JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, RelayError> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a RelayError.
    fn map_error(&self, error: ureq::Error) -> RelayError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    400 => RelayError::InvalidRequest(message),
                    401 | 403 => RelayError::Unauthorized(message),
                    429 => RelayError::RateLimitExceeded,
                    _ => RelayError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    return RelayError::HttpError("Connection failed".to_string());
                }

                let timed_out = std::error::Error::source(&transport)
                    .and_then(|source| source.downcast_ref::<std::io::Error>())
                    .map(|io| {
                        matches!(
                            io.kind(),
                            std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                        )
                    })
                    .unwrap_or(false);

                if timed_out {
                    RelayError::Timeout
                } else {
                    RelayError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Send one message through the relay.
    ///
    /// Makes exactly one request; there is no retry.
    pub fn send(
        &self,
        credentials: &RelayCredentials,
        params: &TemplateParams,
    ) -> RelayResult<()> {
        let request = SendEmailRequest::new(credentials, params);
        let body = serde_json::to_value(&request)?;

        let response = self.post(SEND_PATH, &body)?;
        tracing::info!(
            "Relay accepted message from {} (status: {})",
            params.from_email,
            response.status()
        );
        Ok(())
    }
}
