use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use akson_core::model::LessonData;
use async_trait::async_trait;

use crate::repository::{LessonRepository, StorageError};

/// Reads `{ "lessons": [...] }` from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse lesson data from raw JSON bytes.
///
/// # Errors
///
/// Returns `StorageError::Serialization` when the bytes are not valid lesson data.
pub fn parse_lessons(bytes: &[u8]) -> Result<LessonData, StorageError> {
    serde_json::from_slice(bytes).map_err(|err| StorageError::Serialization(err.to_string()))
}

#[async_trait]
impl LessonRepository for JsonFileRepository {
    async fn load_lessons(&self) -> Result<LessonData, StorageError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                StorageError::NotFound(self.describe())
            } else {
                StorageError::Io(format!("{}: {err}", self.describe()))
            }
        })?;
        parse_lessons(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
