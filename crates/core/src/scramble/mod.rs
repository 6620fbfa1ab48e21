//! Word-scramble puzzle: rebuild a story sentence from shuffled tokens.

mod game;
mod sentence;

pub use game::{
    CORRECT_DELAY, Feedback, FeedbackExpiry, INCORRECT_DELAY, MoveOutcome, Score, ScrambleError,
    ScrambleGame, ScramblePhase, ScrambleSnapshot, Zone,
};
pub use sentence::{ScrambleSentence, Token, eligible_sentences};
