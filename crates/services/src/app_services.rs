use std::path::PathBuf;
use std::sync::Arc;

use storage::repository::Storage;

use crate::lesson_service::LessonService;
use crate::story::{StoryGenerator, StoryService};

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    lessons: Arc<LessonService>,
    stories: Arc<StoryService>,
}

impl AppServices {
    /// Lessons from a JSON file, stories from the environment-configured generator.
    #[must_use]
    pub fn from_json_file(path: impl Into<PathBuf>) -> Self {
        let storage = Storage::json_file(path);
        Self::new(&storage, StoryService::from_env())
    }

    #[must_use]
    pub fn new(storage: &Storage, stories: StoryService) -> Self {
        Self {
            lessons: Arc::new(LessonService::new(Arc::clone(&storage.lessons))),
            stories: Arc::new(stories),
        }
    }

    #[must_use]
    pub fn with_generator(storage: &Storage, generator: Arc<dyn StoryGenerator>) -> Self {
        Self::new(storage, StoryService::new(generator))
    }

    #[must_use]
    pub fn lesson_service(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn story_service(&self) -> Arc<StoryService> {
        Arc::clone(&self.stories)
    }
}
