use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::sync::watch;

use akson_core::Epoch;
use akson_core::pacing::{PacingError, PacingSession, PacingSnapshot, TickOutcome};

use super::timer::AdvanceTimer;

/// Runs a [`PacingSession`] on a Tokio timer and publishes snapshots.
///
/// Clones share the same session. At most one advance is ever scheduled: each
/// state change replaces the pending timer, and a timer that fires after its
/// epoch was superseded does nothing.
#[derive(Clone)]
pub struct PacingDriver {
    shared: Arc<Shared>,
}

struct Shared {
    state: Mutex<State>,
    updates: watch::Sender<PacingSnapshot>,
}

struct State {
    session: PacingSession,
    timer: AdvanceTimer,
}

impl PacingDriver {
    /// Create an idle driver over `items`.
    ///
    /// # Errors
    ///
    /// Returns `PacingError::ZeroInterval` for a zero interval.
    pub fn new(items: Vec<String>, interval: Duration) -> Result<Self, PacingError> {
        let session = PacingSession::new(items, interval)?;
        let (updates, _) = watch::channel(session.snapshot());
        Ok(Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    session,
                    timer: AdvanceTimer::new(),
                }),
                updates,
            }),
        })
    }

    /// Start from the first item and schedule the first advance.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `PacingError::EmptySequence` when there is nothing to show.
    pub fn start(&self) -> Result<(), PacingError> {
        let mut state = self.shared.lock();
        state.session.start()?;
        self.shared.schedule(&mut state);
        self.shared.publish(&state);
        Ok(())
    }

    /// Skip to the next item now, restarting the countdown.
    pub fn advance(&self) -> TickOutcome {
        let mut state = self.shared.lock();
        let outcome = state.session.advance_manually();
        self.shared.after_tick(&mut state, outcome);
        outcome
    }

    /// Change the interval used from the next scheduled advance on.
    ///
    /// # Errors
    ///
    /// Returns `PacingError::ZeroInterval` for a zero interval.
    pub fn set_interval(&self, interval: Duration) -> Result<(), PacingError> {
        let mut state = self.shared.lock();
        state.session.set_interval(interval)?;
        self.shared.publish(&state);
        Ok(())
    }

    /// Return to idle and drop the pending advance.
    pub fn stop(&self) {
        let mut state = self.shared.lock();
        state.timer.cancel();
        state.session.stop();
        self.shared.publish(&state);
    }

    /// Swap in a new sequence; the driver returns to idle.
    pub fn replace_items(&self, items: Vec<String>) {
        let mut state = self.shared.lock();
        state.timer.cancel();
        state.session.replace_items(items);
        self.shared.publish(&state);
    }

    #[must_use]
    pub fn snapshot(&self) -> PacingSnapshot {
        self.shared.lock().session.snapshot()
    }

    /// Snapshots published after every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PacingSnapshot> {
        self.shared.updates.subscribe()
    }

    /// True while an advance is scheduled.
    #[must_use]
    pub fn has_pending_advance(&self) -> bool {
        self.shared.lock().timer.is_pending()
    }
}

/// Drivers compare equal when they share the same session.
impl PartialEq for PacingDriver {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Eq for PacingDriver {}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn schedule(self: &Arc<Self>, state: &mut State) {
        let epoch = state.session.epoch();
        let delay = state.session.interval();
        let shared: Weak<Self> = Arc::downgrade(self);
        tracing::debug!(epoch = epoch.value(), ?delay, "scheduling pacing advance");
        state.timer.schedule(delay, move || {
            if let Some(shared) = shared.upgrade() {
                shared.on_timer(epoch);
            }
        });
    }

    fn on_timer(self: &Arc<Self>, epoch: Epoch) {
        let mut state = self.lock();
        let outcome = state.session.tick_for(epoch);
        if outcome == TickOutcome::Ignored {
            tracing::debug!(epoch = epoch.value(), "stale pacing timer ignored");
            return;
        }
        self.after_tick(&mut state, outcome);
    }

    fn after_tick(self: &Arc<Self>, state: &mut State, outcome: TickOutcome) {
        match outcome {
            TickOutcome::Advanced { .. } => self.schedule(state),
            TickOutcome::Finished { index } => {
                tracing::debug!(index, "pacing finished");
                state.timer.cancel();
            }
            TickOutcome::Ignored => return,
        }
        self.publish(state);
    }

    fn publish(&self, state: &State) {
        self.updates.send_replace(state.session.snapshot());
    }
}
