use async_trait::async_trait;
use akson_core::model::LessonData;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::json::JsonFileRepository;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("lesson data not found: {0}")]
    NotFound(String),

    #[error("failed to read lesson data: {0}")]
    Io(String),

    #[error("lesson data is malformed: {0}")]
    Serialization(String),
}

/// Source of the lesson catalog.
///
/// Read once at startup; adapters do not cache.
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// Load every lesson in textbook order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` when the source is absent, or other
    /// storage errors when it cannot be read or parsed.
    async fn load_lessons(&self) -> Result<LessonData, StorageError>;

    /// Human-readable location of the data, for diagnostics.
    fn describe(&self) -> String;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    data: Arc<Mutex<Option<LessonData>>>,
}

impl InMemoryRepository {
    /// An empty repository; loading reports `NotFound` until data is set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_lessons(data: LessonData) -> Self {
        Self {
            data: Arc::new(Mutex::new(Some(data))),
        }
    }

    /// Replace the stored data.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the lock is poisoned.
    pub fn set_lessons(&self, data: LessonData) -> Result<(), StorageError> {
        let mut guard = self
            .data
            .lock()
            .map_err(|_| StorageError::Io("poisoned lock".into()))?;
        *guard = Some(data);
        Ok(())
    }
}

#[async_trait]
impl LessonRepository for InMemoryRepository {
    async fn load_lessons(&self) -> Result<LessonData, StorageError> {
        let guard = self
            .data
            .lock()
            .map_err(|_| StorageError::Io("poisoned lock".into()))?;
        guard
            .clone()
            .ok_or_else(|| StorageError::NotFound(self.describe()))
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

/// Aggregate storage handle used by the app composition root.
#[derive(Clone)]
pub struct Storage {
    pub lessons: Arc<dyn LessonRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(data: LessonData) -> Self {
        Self {
            lessons: Arc::new(InMemoryRepository::with_lessons(data)),
        }
    }

    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            lessons: Arc::new(JsonFileRepository::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use akson_core::model::{Lesson, Story};

    fn data(count: usize) -> LessonData {
        LessonData {
            lessons: (0..count)
                .map(|i| {
                    Lesson::new(
                        format!("{i}"),
                        format!("Lesson {i}"),
                        1,
                        vec!["ក".into()],
                        Vec::new(),
                        Story::default(),
                    )
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn empty_repository_reports_not_found() {
        let repo = InMemoryRepository::new();
        let err = repo.load_lessons().await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn set_lessons_replaces_data() {
        let repo = InMemoryRepository::with_lessons(data(1));
        repo.set_lessons(data(3)).unwrap();
        let loaded = repo.load_lessons().await.unwrap();
        assert_eq!(loaded.lessons.len(), 3);
    }

    #[tokio::test]
    async fn storage_in_memory_serves_lessons() {
        let storage = Storage::in_memory(data(2));
        let loaded = storage.lessons.load_lessons().await.unwrap();
        assert_eq!(loaded.lessons[1].title(), "Lesson 1");
    }
}
