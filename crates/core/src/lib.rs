#![forbid(unsafe_code)]

pub mod epoch;
pub mod error;
pub mod model;
pub mod pacing;
pub mod scramble;
pub mod text;

pub use epoch::Epoch;
pub use error::Error;
