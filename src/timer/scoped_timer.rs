//! One-shot timer bound to the lifetime of its handle.

use std::time::Duration;
use tokio::task::JoinHandle;

/// A one-shot timer running on the tokio runtime.
///
/// The callback runs once after `delay` unless the timer is cancelled first.
/// Dropping the handle cancels the timer, so a `ScopedTimer` stored in a
/// struct is torn down together with that struct.
///
/// Must be created from within a tokio runtime.
pub struct ScopedTimer {
    handle: Option<JoinHandle<()>>,
    delay: Duration,
}

impl ScopedTimer {
    /// Schedule `callback` to run after `delay`.
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });

        Self {
            handle: Some(handle),
            delay,
        }
    }

    /// Cancel the timer. Has no effect if it already fired.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether the callback is still waiting to run.
    pub fn is_pending(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for ScopedTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedTimer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}
