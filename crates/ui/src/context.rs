use std::sync::Arc;

use services::{AppServices, LessonService, StoryService};

pub trait UiApp: Send + Sync {
    fn lesson_service(&self) -> Arc<LessonService>;
    fn story_service(&self) -> Arc<StoryService>;
}

impl UiApp for AppServices {
    fn lesson_service(&self) -> Arc<LessonService> {
        AppServices::lesson_service(self)
    }

    fn story_service(&self) -> Arc<StoryService> {
        AppServices::story_service(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    lesson_service: Arc<LessonService>,
    story_service: Arc<StoryService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lesson_service: app.lesson_service(),
            story_service: app.story_service(),
        }
    }

    #[must_use]
    pub fn lesson_service(&self) -> Arc<LessonService> {
        Arc::clone(&self.lesson_service)
    }

    #[must_use]
    pub fn story_service(&self) -> Arc<StoryService> {
        Arc::clone(&self.story_service)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
