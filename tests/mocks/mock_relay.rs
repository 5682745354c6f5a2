use async_trait::async_trait;
use portfolio_contact::error::{RelayError, RelayResult};
use portfolio_contact::models::{RelayCredentials, TemplateParams};
use portfolio_contact::AsyncRelayClient;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock relay for testing.
///
/// Records every message it is asked to send and can be told to fail, or to
/// hold each call open until released so a submission stays in flight.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRelay {
    sent: Arc<Mutex<Vec<(RelayCredentials, TemplateParams)>>>,
    failing: Arc<AtomicBool>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl MockRelay {
    /// Create a relay that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a relay that rejects every message with a transport error.
    pub fn failing() -> Self {
        let relay = Self::default();
        relay.set_failing(true);
        relay
    }

    /// Create a relay whose calls block until `release` is called.
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Let one held call complete.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Number of times `send` was called.
    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Template params of the most recent call.
    pub fn last_params(&self) -> Option<TemplateParams> {
        self.sent.lock().unwrap().last().map(|(_, p)| p.clone())
    }

    /// Credentials of the most recent call.
    pub fn last_credentials(&self) -> Option<RelayCredentials> {
        self.sent.lock().unwrap().last().map(|(c, _)| c.clone())
    }
}

#[async_trait]
impl AsyncRelayClient for MockRelay {
    async fn send(
        &self,
        credentials: &RelayCredentials,
        params: &TemplateParams,
    ) -> RelayResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((credentials.clone(), params.clone()));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(RelayError::HttpError("Connection failed".to_string()));
        }
        Ok(())
    }
}
