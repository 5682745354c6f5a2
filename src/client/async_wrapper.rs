//! Async wrapper around synchronous RelayClient.
//!
//! This module provides an async interface to the synchronous RelayClient by using
//! `tokio::task::spawn_blocking` to run the HTTP call on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::RelayClient;
use crate::error::{RelayError, RelayResult};
use crate::models::{RelayCredentials, TemplateParams};
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to an email relay.
///
/// The contact form only depends on this trait, so tests can swap in a
/// relay that records calls or fails on demand.
#[async_trait]
pub trait AsyncRelayClient: Send + Sync {
    /// Deliver one message. Resolves once the relay accepted or rejected it.
    async fn send(&self, credentials: &RelayCredentials, params: &TemplateParams)
        -> RelayResult<()>;
}

/// Async wrapper around synchronous RelayClient.
///
/// Uses `tokio::task::spawn_blocking` to run the synchronous HTTP
/// call on a dedicated thread pool, preventing blocking the async runtime.
#[derive(Clone)]
pub struct AsyncRelayClientImpl {
    client: Arc<RelayClient>,
}

impl AsyncRelayClientImpl {
    pub fn new(client: RelayClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncRelayClient for AsyncRelayClientImpl {
    async fn send(
        &self,
        credentials: &RelayCredentials,
        params: &TemplateParams,
    ) -> RelayResult<()> {
        let client = self.client.clone();
        let credentials = credentials.clone();
        let params = params.clone();

        tokio::task::spawn_blocking(move || client.send(&credentials, &params))
            .await
            .map_err(|e| RelayError::HttpError(format!("Task join error: {}", e)))?
    }
}
