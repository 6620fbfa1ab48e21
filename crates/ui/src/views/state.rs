use dioxus::prelude::*;

use akson_core::model::LessonError;
use services::{LessonServiceError, StoryGeneratorError};

/// Failures a screen can show to the child (or the grown-up helping).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    LessonsUnavailable,
    LessonNotFound,
    StoryDisabled,
    NoVocabulary,
    EmptyStory,
    StoryFailed(String),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::LessonsUnavailable => {
                "The lessons could not be loaded. Please check the lessons file.".to_string()
            }
            ViewError::LessonNotFound => "That lesson does not exist.".to_string(),
            ViewError::StoryDisabled => {
                "API key is not configured. This feature is unavailable.".to_string()
            }
            ViewError::NoVocabulary => {
                "This lesson has no content to create a story from.".to_string()
            }
            ViewError::EmptyStory => "The AI returned an empty story. Please try again.".to_string(),
            ViewError::StoryFailed(detail) => format!(
                "The AI couldn't think of a story right now. Please try again. ({detail})"
            ),
            ViewError::Unknown => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl From<LessonServiceError> for ViewError {
    fn from(_: LessonServiceError) -> Self {
        ViewError::LessonsUnavailable
    }
}

impl From<LessonError> for ViewError {
    fn from(err: LessonError) -> Self {
        match err {
            LessonError::NotFound { .. } => ViewError::LessonNotFound,
            _ => ViewError::LessonsUnavailable,
        }
    }
}

impl From<StoryGeneratorError> for ViewError {
    fn from(err: StoryGeneratorError) -> Self {
        match err {
            StoryGeneratorError::Disabled => ViewError::StoryDisabled,
            StoryGeneratorError::NoVocabulary => ViewError::NoVocabulary,
            StoryGeneratorError::EmptyResponse => ViewError::EmptyStory,
            other => ViewError::StoryFailed(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_errors_map_to_screen_messages() {
        assert_eq!(
            ViewError::from(StoryGeneratorError::Disabled).message(),
            "API key is not configured. This feature is unavailable."
        );
        assert_eq!(
            ViewError::from(StoryGeneratorError::NoVocabulary),
            ViewError::NoVocabulary
        );
        let failed = ViewError::StoryFailed("status 500".into()).message();
        assert!(failed.ends_with("(status 500)"), "{failed}");
    }

    #[test]
    fn missing_lesson_is_not_a_load_failure() {
        assert_eq!(
            ViewError::from(LessonError::NotFound { index: 9 }),
            ViewError::LessonNotFound
        );
        assert_eq!(
            ViewError::from(LessonError::EmptyCatalog),
            ViewError::LessonsUnavailable
        );
    }
}
