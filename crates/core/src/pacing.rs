//! Timed reveal of a display sequence, one item at a time.
//!
//! `PacingSession` is the pure state machine (`Idle → Running → Finished`).
//! It never owns a timer: the host schedules `tick_for` calls and every call
//! carries the [`Epoch`] it was scheduled under, so a timer that outlives a
//! stop, restart or manual skip cannot move the session.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::epoch::Epoch;
use crate::text::word_count;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PacingError {
    #[error("nothing to reveal: the display sequence is empty")]
    EmptySequence,

    #[error("pacing interval must be greater than zero")]
    ZeroInterval,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingPhase {
    Idle,
    Running,
    Finished,
}

/// Result of one advance attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved to `index`; another advance should be scheduled.
    Advanced { index: usize },
    /// Already on the last item; the session is now finished.
    Finished { index: usize },
    /// Not running, already finished, or the caller's epoch is stale.
    Ignored,
}

/// Revealed count against a total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.done >= self.total
    }
}

/// Cloneable view of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingSnapshot {
    pub items: Arc<[String]>,
    pub phase: PacingPhase,
    pub current_index: usize,
    pub interval: Duration,
    pub items_progress: Progress,
    pub words_progress: Progress,
    pub epoch: Epoch,
}

impl PacingSnapshot {
    #[must_use]
    pub fn current_item(&self) -> Option<&str> {
        match self.phase {
            PacingPhase::Idle => None,
            PacingPhase::Running | PacingPhase::Finished => {
                self.items.get(self.current_index).map(String::as_str)
            }
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == PacingPhase::Finished
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Pacing state for one display sequence.
#[derive(Debug, Clone)]
pub struct PacingSession {
    items: Arc<[String]>,
    /// `cumulative_words[i]` = words in lines `0..=i`.
    cumulative_words: Vec<usize>,
    current: usize,
    interval: Duration,
    phase: PacingPhase,
    epoch: Epoch,
}

impl PacingSession {
    /// Create an idle session over `items`.
    ///
    /// # Errors
    ///
    /// Returns `PacingError::ZeroInterval` for a zero interval.
    pub fn new(items: Vec<String>, interval: Duration) -> Result<Self, PacingError> {
        if interval.is_zero() {
            return Err(PacingError::ZeroInterval);
        }
        let cumulative_words = cumulative_word_counts(&items);
        Ok(Self {
            items: items.into(),
            cumulative_words,
            current: 0,
            interval,
            phase: PacingPhase::Idle,
            epoch: Epoch::default(),
        })
    }

    /// Swap in a new sequence and return to `Idle`.
    pub fn replace_items(&mut self, items: Vec<String>) {
        self.cumulative_words = cumulative_word_counts(&items);
        self.items = items.into();
        self.current = 0;
        self.phase = PacingPhase::Idle;
        self.epoch = self.epoch.next();
    }

    /// Begin (or restart) playback from the first item.
    ///
    /// Restarting discards the previous position and epoch.
    ///
    /// # Errors
    ///
    /// Returns `PacingError::EmptySequence` when there is nothing to show.
    pub fn start(&mut self) -> Result<Epoch, PacingError> {
        if self.items.is_empty() {
            return Err(PacingError::EmptySequence);
        }
        self.current = 0;
        self.phase = PacingPhase::Running;
        self.epoch = self.epoch.next();
        Ok(self.epoch)
    }

    /// Timer-driven advance. Ignored unless `epoch` is the current one.
    pub fn tick_for(&mut self, epoch: Epoch) -> TickOutcome {
        if epoch != self.epoch {
            return TickOutcome::Ignored;
        }
        self.tick()
    }

    /// Advance by exactly one item, or finish on the last item.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != PacingPhase::Running {
            return TickOutcome::Ignored;
        }
        // Each reveal gets its own epoch so a timer armed for the previous
        // item cannot advance again after a manual skip.
        self.epoch = self.epoch.next();
        if self.current + 1 >= self.items.len() {
            self.phase = PacingPhase::Finished;
            return TickOutcome::Finished {
                index: self.current,
            };
        }
        self.current += 1;
        TickOutcome::Advanced {
            index: self.current,
        }
    }

    /// User-triggered skip; shares the timer path.
    pub fn advance_manually(&mut self) -> TickOutcome {
        self.tick()
    }

    /// Change the cadence used for the next scheduled advance.
    ///
    /// # Errors
    ///
    /// Returns `PacingError::ZeroInterval` for a zero interval.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), PacingError> {
        if interval.is_zero() {
            return Err(PacingError::ZeroInterval);
        }
        self.interval = interval;
        Ok(())
    }

    /// Leave any state for `Idle`, invalidating outstanding timers.
    pub fn stop(&mut self) {
        if self.phase != PacingPhase::Idle {
            self.phase = PacingPhase::Idle;
            self.epoch = self.epoch.next();
        }
    }

    /// Jump to `Finished` on the current item.
    pub fn mark_complete(&mut self) {
        if self.phase == PacingPhase::Running {
            self.phase = PacingPhase::Finished;
            self.epoch = self.epoch.next();
        }
    }

    #[must_use]
    pub fn phase(&self) -> PacingPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == PacingPhase::Running
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == PacingPhase::Finished
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Items revealed so far, including the one on screen.
    #[must_use]
    pub fn items_progress(&self) -> Progress {
        let done = match self.phase {
            PacingPhase::Idle => 0,
            PacingPhase::Running | PacingPhase::Finished => self.current + 1,
        };
        Progress {
            done,
            total: self.items.len(),
        }
    }

    /// Words in every line up to and including the one on screen.
    #[must_use]
    pub fn words_progress(&self) -> Progress {
        let total = self.cumulative_words.last().copied().unwrap_or(0);
        let done = match self.phase {
            PacingPhase::Idle => 0,
            PacingPhase::Running => self.cumulative_words[self.current],
            PacingPhase::Finished => total,
        };
        Progress { done, total }
    }

    #[must_use]
    pub fn snapshot(&self) -> PacingSnapshot {
        PacingSnapshot {
            items: Arc::clone(&self.items),
            phase: self.phase,
            current_index: self.current,
            interval: self.interval,
            items_progress: self.items_progress(),
            words_progress: self.words_progress(),
            epoch: self.epoch,
        }
    }
}

fn cumulative_word_counts(items: &[String]) -> Vec<usize> {
    items
        .iter()
        .scan(0_usize, |sum, line| {
            *sum += word_count(line);
            Some(*sum)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    fn session(values: &[&str]) -> PacingSession {
        PacingSession::new(items(values), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn start_rejects_empty_sequence() {
        let mut pacing = session(&[]);
        assert_eq!(pacing.start().unwrap_err(), PacingError::EmptySequence);
        assert_eq!(pacing.phase(), PacingPhase::Idle);
    }

    #[test]
    fn new_rejects_zero_interval() {
        let err = PacingSession::new(items(&["ក"]), Duration::ZERO).unwrap_err();
        assert_eq!(err, PacingError::ZeroInterval);
    }

    #[test]
    fn ticks_through_every_item_then_finishes() {
        for len in 1..6 {
            let values: Vec<String> = (0..len).map(|i| format!("item{i}")).collect();
            let mut pacing = PacingSession::new(values, Duration::from_secs(2)).unwrap();
            pacing.start().unwrap();
            for _ in 0..len - 1 {
                assert!(matches!(pacing.tick(), TickOutcome::Advanced { .. }));
            }
            assert_eq!(pacing.current_index(), len - 1);
            assert!(!pacing.is_finished());
            assert_eq!(
                pacing.tick(),
                TickOutcome::Finished { index: len - 1 }
            );
            assert!(pacing.is_finished());
            assert_eq!(pacing.tick(), TickOutcome::Ignored);
            assert_eq!(pacing.current_index(), len - 1);
        }
    }

    #[test]
    fn three_line_story_finishes_on_third_tick() {
        let mut pacing = session(&["a", "b", "c"]);
        pacing.start().unwrap();
        pacing.tick();
        pacing.tick();
        assert_eq!(pacing.current_index(), 2);
        assert!(!pacing.is_finished());
        pacing.tick();
        assert!(pacing.is_finished());
    }

    #[test]
    fn manual_advance_matches_tick() {
        let mut pacing = session(&["a", "b"]);
        assert_eq!(pacing.advance_manually(), TickOutcome::Ignored);
        pacing.start().unwrap();
        assert_eq!(pacing.advance_manually(), TickOutcome::Advanced { index: 1 });
        assert_eq!(pacing.advance_manually(), TickOutcome::Finished { index: 1 });
    }

    #[test]
    fn stale_epoch_is_ignored() {
        let mut pacing = session(&["a", "b", "c"]);
        let first = pacing.start().unwrap();
        pacing.stop();
        let second = pacing.start().unwrap();
        assert_ne!(first, second);
        assert_eq!(pacing.tick_for(first), TickOutcome::Ignored);
        assert_eq!(pacing.current_index(), 0);
        assert_eq!(pacing.tick_for(second), TickOutcome::Advanced { index: 1 });
    }

    #[test]
    fn manual_skip_invalidates_the_armed_timer() {
        let mut pacing = session(&["a", "b", "c"]);
        let armed = pacing.start().unwrap();
        pacing.advance_manually();
        assert_eq!(pacing.tick_for(armed), TickOutcome::Ignored);
        assert_eq!(pacing.current_index(), 1);
        let rearmed = pacing.epoch();
        assert_eq!(pacing.tick_for(rearmed), TickOutcome::Advanced { index: 2 });
    }

    #[test]
    fn restart_resets_position() {
        let mut pacing = session(&["a", "b", "c"]);
        pacing.start().unwrap();
        pacing.tick();
        pacing.tick();
        pacing.stop();
        assert_eq!(pacing.phase(), PacingPhase::Idle);
        pacing.start().unwrap();
        assert_eq!(pacing.current_index(), 0);
        assert!(pacing.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut pacing = session(&["a"]);
        pacing.start().unwrap();
        pacing.stop();
        let epoch = pacing.epoch();
        pacing.stop();
        assert_eq!(pacing.epoch(), epoch);
        assert_eq!(pacing.phase(), PacingPhase::Idle);
    }

    #[test]
    fn word_progress_counts_lines_up_to_current() {
        let mut pacing = session(&["ឆ្មា ញ៉ាំ ត្រី", "ឆ្កែ  រត់", "មាន់ រក ចំណី ដី"]);
        assert_eq!(pacing.words_progress(), Progress { done: 0, total: 9 });
        pacing.start().unwrap();
        assert_eq!(pacing.words_progress().done, 3);
        pacing.tick();
        assert_eq!(pacing.words_progress().done, 5);
        pacing.tick();
        assert_eq!(pacing.words_progress().done, 9);
        assert!(!pacing.is_finished());
        pacing.tick();
        assert!(pacing.words_progress().is_complete());
        assert!(pacing.is_finished());
    }

    #[test]
    fn items_progress_includes_current_item() {
        let mut pacing = session(&["a", "b", "c"]);
        pacing.start().unwrap();
        pacing.tick();
        assert_eq!(pacing.items_progress(), Progress { done: 2, total: 3 });
    }

    #[test]
    fn mark_complete_finishes_early() {
        let mut pacing = session(&["a", "b", "c"]);
        pacing.start().unwrap();
        pacing.mark_complete();
        assert!(pacing.is_finished());
        assert_eq!(pacing.current_index(), 0);
        assert_eq!(pacing.tick(), TickOutcome::Ignored);
    }

    #[test]
    fn set_interval_keeps_position() {
        let mut pacing = session(&["a", "b"]);
        pacing.start().unwrap();
        pacing.set_interval(Duration::from_secs(12)).unwrap();
        assert_eq!(pacing.interval(), Duration::from_secs(12));
        assert_eq!(pacing.current_index(), 0);
        assert!(pacing.set_interval(Duration::ZERO).is_err());
    }

    #[test]
    fn replace_items_returns_to_idle() {
        let mut pacing = session(&["a"]);
        let epoch = pacing.start().unwrap();
        pacing.replace_items(items(&["x y", "z"]));
        assert_eq!(pacing.phase(), PacingPhase::Idle);
        assert_eq!(pacing.tick_for(epoch), TickOutcome::Ignored);
        assert_eq!(pacing.words_progress().total, 3);
    }

    #[test]
    fn snapshot_exposes_current_item() {
        let mut pacing = session(&["a", "b"]);
        assert_eq!(pacing.snapshot().current_item(), None);
        pacing.start().unwrap();
        pacing.tick();
        let snapshot = pacing.snapshot();
        assert_eq!(snapshot.current_item(), Some("b"));
        assert_eq!(snapshot.epoch, pacing.epoch());
    }
}
