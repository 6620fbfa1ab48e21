//! Timer-driven hosts for the pacing and scramble state machines.

mod pacing;
mod scramble;
mod timer;

pub use pacing::PacingDriver;
pub use scramble::ScrambleDriver;
pub use timer::AdvanceTimer;
