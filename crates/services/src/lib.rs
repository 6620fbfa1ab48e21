#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod lesson_service;
pub mod playback;
pub mod story;

pub use app_services::AppServices;
pub use error::{LessonServiceError, StoryGeneratorError};
pub use lesson_service::LessonService;
pub use playback::{AdvanceTimer, PacingDriver, ScrambleDriver};
pub use story::{
    ChatStoryGenerator, StoryGenerator, StoryGeneratorConfig, StoryService, StoryVocabulary,
};
