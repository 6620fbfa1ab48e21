use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::watch;

use akson_core::Epoch;
use akson_core::model::TokenId;
use akson_core::scramble::{
    Feedback, FeedbackExpiry, MoveOutcome, ScrambleError, ScrambleGame, ScrambleSentence,
    ScrambleSnapshot, Zone, eligible_sentences,
};

use super::timer::AdvanceTimer;

/// Runs a [`ScrambleGame`], expiring the correct/incorrect feedback on a timer.
#[derive(Clone)]
pub struct ScrambleDriver {
    shared: Arc<Shared>,
}

struct Shared {
    state: Mutex<State>,
    updates: watch::Sender<ScrambleSnapshot>,
}

struct State {
    game: ScrambleGame,
    rng: StdRng,
    timer: AdvanceTimer,
}

impl ScrambleDriver {
    /// Game over the eligible lines of a story, shuffled from OS entropy.
    #[must_use]
    pub fn from_story(lines: &[String]) -> Self {
        Self::new(eligible_sentences(lines))
    }

    #[must_use]
    pub fn new(sentences: Vec<ScrambleSentence>) -> Self {
        Self::with_rng(sentences, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn with_rng(sentences: Vec<ScrambleSentence>, rng: StdRng) -> Self {
        let game = ScrambleGame::new(sentences);
        let (updates, _) = watch::channel(game.snapshot());
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    game,
                    rng,
                    timer: AdvanceTimer::new(),
                }),
                updates,
            }),
        }
    }

    /// Zero the score and deal the first sentence.
    ///
    /// # Errors
    ///
    /// Returns `ScrambleError::NoEligibleSentences` when there is nothing to play.
    pub fn start(&self) -> Result<(), ScrambleError> {
        let mut guard = self.shared.lock();
        let state = &mut *guard;
        state.timer.cancel();
        state.game.start(&mut state.rng)?;
        self.shared.publish(state);
        Ok(())
    }

    /// Move a token between zones; a completed answer schedules its feedback expiry.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `ScrambleError` when the move is not allowed.
    pub fn move_token(&self, id: TokenId, from: Zone, to: Zone) -> Result<MoveOutcome, ScrambleError> {
        let mut state = self.shared.lock();
        let outcome = state.game.move_token(id, from, to)?;
        match outcome {
            MoveOutcome::Moved => {}
            MoveOutcome::Solved(feedback) => {
                tracing::debug!(sentence = state.game.sentence_index(), "sentence solved");
                self.shared.schedule(&mut state, feedback);
            }
            MoveOutcome::Mismatch(feedback) => {
                tracing::debug!(sentence = state.game.sentence_index(), "sentence mismatch");
                self.shared.schedule(&mut state, feedback);
            }
        }
        self.shared.publish(&state);
        Ok(outcome)
    }

    /// Reshuffle the current sentence.
    ///
    /// # Errors
    ///
    /// Returns `ScrambleError::NotPlaying` outside a sentence.
    pub fn reset(&self) -> Result<(), ScrambleError> {
        let mut guard = self.shared.lock();
        let state = &mut *guard;
        state.game.reset(&mut state.rng)?;
        state.timer.cancel();
        self.shared.publish(state);
        Ok(())
    }

    /// Drop any pending feedback expiry.
    pub fn stop(&self) {
        let mut state = self.shared.lock();
        state.timer.cancel();
        state.game.stop();
        self.shared.publish(&state);
    }

    #[must_use]
    pub fn snapshot(&self) -> ScrambleSnapshot {
        self.shared.lock().game.snapshot()
    }

    /// The sentence on the board, if any.
    #[must_use]
    pub fn current_sentence(&self) -> Option<ScrambleSentence> {
        self.shared.lock().game.current_sentence().cloned()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ScrambleSnapshot> {
        self.shared.updates.subscribe()
    }
}

/// Drivers compare equal when they share the same session.
impl PartialEq for ScrambleDriver {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Eq for ScrambleDriver {}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn schedule(self: &Arc<Self>, state: &mut State, feedback: Feedback) {
        let shared: Weak<Self> = Arc::downgrade(self);
        let epoch = feedback.epoch;
        state.timer.schedule(feedback.delay, move || {
            if let Some(shared) = shared.upgrade() {
                shared.on_timer(epoch);
            }
        });
    }

    fn on_timer(&self, epoch: Epoch) {
        let mut guard = self.lock();
        let state = &mut *guard;
        match state.game.expire_feedback(epoch, &mut state.rng) {
            FeedbackExpiry::Ignored => {
                tracing::debug!(epoch = epoch.value(), "stale feedback timer ignored");
                return;
            }
            FeedbackExpiry::NextSentence { index } => {
                tracing::debug!(index, "next sentence dealt");
            }
            FeedbackExpiry::Finished => {
                let score = state.game.score();
                tracing::info!(solved = score.solved, total = score.total, "word scramble finished");
            }
            FeedbackExpiry::Resumed => {}
        }
        self.publish(state);
    }

    fn publish(&self, state: &State) {
        self.updates.send_replace(state.game.snapshot());
    }
}
