//! Shared error types for the services crate.

use thiserror::Error;

use akson_core::model::LessonError;
use storage::repository::StorageError;

/// Errors emitted by `StoryGenerator` implementations and `StoryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoryGeneratorError {
    #[error("story generation is not configured")]
    Disabled,
    #[error("the lesson has no vocabulary to build a story from")]
    NoVocabulary,
    #[error("the story generator returned an empty story")]
    EmptyResponse,
    #[error("story generator request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `LessonService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Lesson(#[from] LessonError),
}
