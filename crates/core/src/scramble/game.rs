use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::epoch::Epoch;
use crate::model::TokenId;

use super::sentence::{ScrambleSentence, Token};

/// How long a solved sentence stays on screen before the next one loads.
pub const CORRECT_DELAY: Duration = Duration::from_secs(2);
/// How long the wrong-order shake lasts before play resumes.
pub const INCORRECT_DELAY: Duration = Duration::from_secs(1);

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScrambleError {
    #[error("no story line has at least two words")]
    NoEligibleSentences,

    #[error("tokens can only be moved while playing")]
    NotPlaying,

    #[error("token {0} is not in the source collection")]
    TokenNotFound(TokenId),

    #[error("source and destination must differ")]
    SameZone,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScramblePhase {
    Intro,
    Playing,
    Correct,
    Incorrect,
    Finished,
}

impl ScramblePhase {
    /// Phases that expire on their own after a fixed delay.
    #[must_use]
    pub fn is_transient(self) -> bool {
        matches!(self, ScramblePhase::Correct | ScramblePhase::Incorrect)
    }
}

/// The two places a token can live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Unordered pool of tokens still to place.
    Bank,
    /// Ordered answer being built.
    Answer,
}

/// A transient phase the host must expire after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub epoch: Epoch,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Token moved; the bank still has tokens (or play is not being judged).
    Moved,
    /// Bank emptied in the right order.
    Solved(Feedback),
    /// Bank emptied in the wrong order.
    Mismatch(Feedback),
}

impl MoveOutcome {
    #[must_use]
    pub fn feedback(self) -> Option<Feedback> {
        match self {
            MoveOutcome::Moved => None,
            MoveOutcome::Solved(feedback) | MoveOutcome::Mismatch(feedback) => Some(feedback),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackExpiry {
    /// `Correct` expired and the next sentence is on the board.
    NextSentence { index: usize },
    /// `Correct` expired on the last sentence.
    Finished,
    /// `Incorrect` expired; the board is untouched.
    Resumed,
    /// Stale epoch or no transient phase active.
    Ignored,
}

/// Solved sentences out of all eligible ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub solved: usize,
    pub total: usize,
}

/// Cloneable view of the game for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleSnapshot {
    pub phase: ScramblePhase,
    pub sentence_index: usize,
    pub word_bank: Vec<Token>,
    pub drop_zone: Vec<Token>,
    pub score: Score,
    pub epoch: Epoch,
}

//
// ─── GAME ──────────────────────────────────────────────────────────────────────
//

/// Sentence-reordering game over a fixed list of eligible sentences.
#[derive(Debug, Clone)]
pub struct ScrambleGame {
    sentences: Vec<ScrambleSentence>,
    sentence_index: usize,
    word_bank: Vec<Token>,
    drop_zone: Vec<Token>,
    solved: usize,
    phase: ScramblePhase,
    epoch: Epoch,
}

impl ScrambleGame {
    #[must_use]
    pub fn new(sentences: Vec<ScrambleSentence>) -> Self {
        Self {
            sentences,
            sentence_index: 0,
            word_bank: Vec::new(),
            drop_zone: Vec::new(),
            solved: 0,
            phase: ScramblePhase::Intro,
            epoch: Epoch::default(),
        }
    }

    /// Zero the score and load the first sentence.
    ///
    /// # Errors
    ///
    /// Returns `ScrambleError::NoEligibleSentences` when there is nothing to play.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ScrambleError> {
        if self.sentences.is_empty() {
            return Err(ScrambleError::NoEligibleSentences);
        }
        self.solved = 0;
        self.setup_sentence(0, rng);
        Ok(())
    }

    /// Load sentence `index` with a fresh shuffle, or finish past the end.
    pub fn setup_sentence<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) {
        self.epoch = self.epoch.next();
        self.sentence_index = index;
        self.drop_zone.clear();
        let Some(sentence) = self.sentences.get(index) else {
            self.word_bank.clear();
            self.phase = ScramblePhase::Finished;
            return;
        };
        self.word_bank = shuffled(sentence, rng);
        self.phase = ScramblePhase::Playing;
    }

    /// Reshuffle the current sentence, discarding placement.
    ///
    /// # Errors
    ///
    /// Returns `ScrambleError::NotPlaying` outside a sentence.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ScrambleError> {
        match self.phase {
            ScramblePhase::Playing | ScramblePhase::Incorrect => {
                self.setup_sentence(self.sentence_index, rng);
                Ok(())
            }
            ScramblePhase::Intro | ScramblePhase::Correct | ScramblePhase::Finished => {
                Err(ScrambleError::NotPlaying)
            }
        }
    }

    /// Move a token between the bank and the answer, appending it at the end.
    ///
    /// Emptying the bank judges the answer.
    ///
    /// # Errors
    ///
    /// Returns `ScrambleError` when not playing, when `from == to`, or when the
    /// token is not in `from`.
    pub fn move_token(
        &mut self,
        id: TokenId,
        from: Zone,
        to: Zone,
    ) -> Result<MoveOutcome, ScrambleError> {
        if self.phase != ScramblePhase::Playing {
            return Err(ScrambleError::NotPlaying);
        }
        if from == to {
            return Err(ScrambleError::SameZone);
        }
        let (source, destination) = match from {
            Zone::Bank => (&mut self.word_bank, &mut self.drop_zone),
            Zone::Answer => (&mut self.drop_zone, &mut self.word_bank),
        };
        let position = source
            .iter()
            .position(|token| token.id() == id)
            .ok_or(ScrambleError::TokenNotFound(id))?;
        let token = source.remove(position);
        destination.push(token);

        if !self.word_bank.is_empty() {
            return Ok(MoveOutcome::Moved);
        }
        Ok(self.judge())
    }

    fn judge(&mut self) -> MoveOutcome {
        let solved = self
            .current_sentence()
            .is_some_and(|sentence| sentence.matches(&self.drop_zone));
        self.epoch = self.epoch.next();
        if solved {
            self.solved += 1;
            self.phase = ScramblePhase::Correct;
            MoveOutcome::Solved(Feedback {
                epoch: self.epoch,
                delay: CORRECT_DELAY,
            })
        } else {
            self.phase = ScramblePhase::Incorrect;
            MoveOutcome::Mismatch(Feedback {
                epoch: self.epoch,
                delay: INCORRECT_DELAY,
            })
        }
    }

    /// End a `Correct` or `Incorrect` phase scheduled under `epoch`.
    pub fn expire_feedback<R: Rng + ?Sized>(&mut self, epoch: Epoch, rng: &mut R) -> FeedbackExpiry {
        if epoch != self.epoch {
            return FeedbackExpiry::Ignored;
        }
        match self.phase {
            ScramblePhase::Correct => {
                self.setup_sentence(self.sentence_index + 1, rng);
                if self.phase == ScramblePhase::Finished {
                    FeedbackExpiry::Finished
                } else {
                    FeedbackExpiry::NextSentence {
                        index: self.sentence_index,
                    }
                }
            }
            ScramblePhase::Incorrect => {
                self.phase = ScramblePhase::Playing;
                FeedbackExpiry::Resumed
            }
            ScramblePhase::Intro | ScramblePhase::Playing | ScramblePhase::Finished => {
                FeedbackExpiry::Ignored
            }
        }
    }

    /// Invalidate any pending feedback timer.
    pub fn stop(&mut self) {
        self.epoch = self.epoch.next();
    }

    #[must_use]
    pub fn phase(&self) -> ScramblePhase {
        self.phase
    }

    #[must_use]
    pub fn sentence_index(&self) -> usize {
        self.sentence_index
    }

    #[must_use]
    pub fn sentences(&self) -> &[ScrambleSentence] {
        &self.sentences
    }

    #[must_use]
    pub fn current_sentence(&self) -> Option<&ScrambleSentence> {
        match self.phase {
            ScramblePhase::Intro | ScramblePhase::Finished => None,
            ScramblePhase::Playing | ScramblePhase::Correct | ScramblePhase::Incorrect => {
                self.sentences.get(self.sentence_index)
            }
        }
    }

    #[must_use]
    pub fn word_bank(&self) -> &[Token] {
        &self.word_bank
    }

    #[must_use]
    pub fn drop_zone(&self) -> &[Token] {
        &self.drop_zone
    }

    #[must_use]
    pub fn score(&self) -> Score {
        Score {
            solved: self.solved,
            total: self.sentences.len(),
        }
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[must_use]
    pub fn snapshot(&self) -> ScrambleSnapshot {
        ScrambleSnapshot {
            phase: self.phase,
            sentence_index: self.sentence_index,
            word_bank: self.word_bank.clone(),
            drop_zone: self.drop_zone.clone(),
            score: self.score(),
            epoch: self.epoch,
        }
    }
}

/// Random order guaranteed to differ from the sentence.
///
/// Compares words when the sentence has distinct words, token identities
/// otherwise, so the loop always terminates for two or more tokens.
fn shuffled<R: Rng + ?Sized>(sentence: &ScrambleSentence, rng: &mut R) -> Vec<Token> {
    let original = sentence.tokens();
    let mut tokens = original.to_vec();
    let by_word = sentence.has_distinct_words();
    loop {
        tokens.shuffle(rng);
        let unchanged = if by_word {
            tokens
                .iter()
                .zip(original)
                .all(|(left, right)| left.word() == right.word())
        } else {
            tokens
                .iter()
                .zip(original)
                .all(|(left, right)| left.id() == right.id())
        };
        if !unchanged {
            return tokens;
        }
    }
}
