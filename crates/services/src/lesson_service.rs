use std::sync::Arc;

use akson_core::model::LessonCatalog;
use storage::repository::LessonRepository;

use crate::error::LessonServiceError;

/// Loads and validates the lesson catalog from a repository.
#[derive(Clone)]
pub struct LessonService {
    lessons: Arc<dyn LessonRepository>,
}

impl LessonService {
    #[must_use]
    pub fn new(lessons: Arc<dyn LessonRepository>) -> Self {
        Self { lessons }
    }

    /// Load every lesson and validate it into a catalog.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Storage` when the source cannot be read, or
    /// `LessonServiceError::Lesson` when the data fails validation.
    pub async fn load_catalog(&self) -> Result<LessonCatalog, LessonServiceError> {
        let source = self.lessons.describe();
        let data = self.lessons.load_lessons().await.map_err(|err| {
            tracing::error!(%source, error = %err, "failed to load lessons");
            err
        })?;
        let catalog = LessonCatalog::new(data).map_err(|err| {
            tracing::error!(%source, error = %err, "lesson data failed validation");
            err
        })?;
        tracing::info!(%source, lessons = catalog.len(), "lesson catalog loaded");
        Ok(catalog)
    }

    /// Where lessons are read from.
    #[must_use]
    pub fn source(&self) -> String {
        self.lessons.describe()
    }
}
