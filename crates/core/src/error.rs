use thiserror::Error;

use crate::model::LessonError;
use crate::pacing::PacingError;
use crate::scramble::ScrambleError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Pacing(#[from] PacingError),
    #[error(transparent)]
    Scramble(#[from] ScrambleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err: Error = LessonError::NotFound { index: 4 }.into();
        assert!(matches!(err, Error::Lesson(LessonError::NotFound { index: 4 })));
        assert_eq!(err.to_string(), "no lesson at position 4");
    }
}
