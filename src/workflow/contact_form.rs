//! Contact form state and submission workflow.
//!
//! A `ContactForm` owns the visitor's input, the per-field errors shown next to
//! the inputs, and the submission status that drives the feedback banner.
//! Submitting validates locally, then makes at most one relay call.

use super::validation::{validate, ValidationErrors};
use crate::client::AsyncRelayClient;
use crate::config::{Config, RelaySettings, DEFAULT_STATUS_RESET_MS};
use crate::domain::{ContactField, ValidationError};
use crate::error::{SubmitError, SubmitResult};
use crate::metrics::Metrics;
use crate::models::{ContactSubmission, SubmissionStatus, TemplateParams};
use crate::timer::ScopedTimer;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Everything a form needs from configuration, fixed at construction.
#[derive(Debug, Clone)]
pub struct FormSettings {
    /// Relay secrets; checked on every submit
    pub relay: RelaySettings,

    /// Address the relay forwards messages to
    pub recipient_email: String,

    /// How long a success/error status is shown before returning to idle
    pub status_reset: Duration,
}

impl FormSettings {
    pub fn new(relay: RelaySettings, recipient_email: impl Into<String>) -> Self {
        Self {
            relay,
            recipient_email: recipient_email.into(),
            status_reset: Duration::from_millis(DEFAULT_STATUS_RESET_MS),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            relay: config.relay.clone(),
            recipient_email: config.recipient_email.clone(),
            status_reset: config.status_reset(),
        }
    }

    pub fn with_status_reset(mut self, status_reset: Duration) -> Self {
        self.status_reset = status_reset;
        self
    }
}

#[derive(Debug, Default)]
struct FormState {
    submission: ContactSubmission,
    errors: ValidationErrors,
    status: SubmissionStatus,
}

/// A single contact form instance.
///
/// Dropping the form cancels its pending status reset. An in-flight relay
/// call is not cancelled; its result is simply never observed.
pub struct ContactForm {
    relay: Arc<dyn AsyncRelayClient>,
    settings: FormSettings,
    state: Arc<Mutex<FormState>>,
    reset_timer: Mutex<Option<ScopedTimer>>,
    metrics: Metrics,
}

impl ContactForm {
    pub fn new(relay: Arc<dyn AsyncRelayClient>, settings: FormSettings) -> Self {
        Self::with_metrics(relay, settings, Metrics::new())
    }

    /// Build a form that records into `metrics`.
    ///
    /// Pass the collector the relay client was built with to get HTTP and
    /// submission counters in one summary.
    pub fn with_metrics(
        relay: Arc<dyn AsyncRelayClient>,
        settings: FormSettings,
        metrics: Metrics,
    ) -> Self {
        Self {
            relay,
            settings,
            state: Arc::new(Mutex::new(FormState::default())),
            reset_timer: Mutex::new(None),
            metrics,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_timer(&self) -> MutexGuard<'_, Option<ScopedTimer>> {
        self.reset_timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Write a field and clear any error currently shown for it.
    ///
    /// The new value is not validated until the next submit.
    pub fn update_field(&self, field: ContactField, value: impl Into<String>) {
        let mut state = self.lock_state();
        state.submission.set(field, value.into());
        if state.errors.clear(field) {
            tracing::trace!(%field, "Cleared validation error on edit");
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.lock_state().status
    }

    /// Whether the submit control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.status() == SubmissionStatus::Submitting
    }

    pub fn errors(&self) -> ValidationErrors {
        self.lock_state().errors.clone()
    }

    pub fn error(&self, field: ContactField) -> Option<ValidationError> {
        self.lock_state().errors.get(field).cloned()
    }

    pub fn submission(&self) -> ContactSubmission {
        self.lock_state().submission.clone()
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Whether a status reset is scheduled and has not fired yet.
    pub fn reset_pending(&self) -> bool {
        self.lock_timer()
            .as_ref()
            .map(ScopedTimer::is_pending)
            .unwrap_or(false)
    }

    /// Validate the current input and, if it passes, send it through the relay.
    ///
    /// - While a submission is in flight, returns `Busy` without doing anything.
    /// - On a validation failure, records the first error in form order
    ///   (name, email, phone, message) and returns it; status is unchanged
    ///   and the relay is not called.
    /// - Otherwise moves to `Submitting`, makes one relay call, and settles to
    ///   `Success` (fields cleared) or `Error` (fields kept). Either way the
    ///   status returns to `Idle` after the configured reset delay.
    pub async fn submit(&self) -> SubmitResult<()> {
        let submission = {
            let mut state = self.lock_state();

            if state.status == SubmissionStatus::Submitting {
                self.metrics.record_busy_rejection();
                tracing::debug!("Submit ignored: a submission is already in flight");
                return Err(SubmitError::Busy);
            }

            let errors = validate(&state.submission);
            if let Some(error) = errors.first().cloned() {
                self.metrics.record_validation_rejection();
                tracing::debug!(field = %error.field(), "Submit blocked by validation: {}", error);
                state.errors.set(error.clone());
                return Err(SubmitError::Validation(error));
            }

            state.status = SubmissionStatus::Submitting;
            state.errors.clear_all();
            state.submission.clone()
        };

        // A banner from the previous attempt must not reset this one
        if let Some(mut timer) = self.lock_timer().take() {
            timer.cancel();
        }
        self.metrics.record_submission_attempt();

        let result = self.deliver(&submission).await;

        {
            let mut state = self.lock_state();
            match &result {
                Ok(()) => {
                    state.submission.clear();
                    state.status = SubmissionStatus::Success;
                }
                Err(_) => state.status = SubmissionStatus::Error,
            }
        }

        match &result {
            Ok(()) => {
                self.metrics.record_submission_success();
                tracing::info!("Contact message sent");
            }
            Err(e) => {
                self.metrics.record_submission_failure();
                tracing::error!("Contact message failed: {}", e);
            }
        }

        self.schedule_reset();
        result
    }

    async fn deliver(&self, submission: &ContactSubmission) -> SubmitResult<()> {
        let credentials = self.settings.relay.credentials()?;
        let params = TemplateParams::from_submission(submission, &self.settings.recipient_email);
        self.relay.send(&credentials, &params).await?;
        Ok(())
    }

    fn schedule_reset(&self) {
        let state = Arc::clone(&self.state);
        let timer = ScopedTimer::schedule(self.settings.status_reset, move || {
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.status.is_settled() {
                tracing::debug!(status = %state.status, "Status reset to idle");
                state.status = SubmissionStatus::Idle;
            }
        });

        *self.lock_timer() = Some(timer);
    }
}

impl std::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("status", &self.status())
            .field("settings", &self.settings)
            .finish()
    }
}
