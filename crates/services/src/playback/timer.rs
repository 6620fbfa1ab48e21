use std::time::Duration;

use tokio::task::JoinHandle;

/// The one pending delayed action owned by a playback session.
///
/// Scheduling aborts whatever was pending before, and dropping the timer
/// aborts it too, so a session never has two timers in flight.
#[derive(Debug, Default)]
pub struct AdvanceTimer {
    handle: Option<JoinHandle<()>>,
}

impl AdvanceTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` after `delay`, replacing any pending action.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Abort the pending action, if any. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for AdvanceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
