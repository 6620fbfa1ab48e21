//! Generated practice stories built from a lesson's vocabulary.

mod chat;
mod prompt;

use std::sync::Arc;

use async_trait::async_trait;

use akson_core::model::Lesson;

use crate::error::StoryGeneratorError;

pub use chat::{ChatStoryGenerator, StoryGeneratorConfig};
pub use prompt::{SYSTEM_INSTRUCTION, StoryVocabulary, TEMPERATURE, build_prompt, parse_story_lines};

/// Produces story lines from vocabulary.
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    /// False when the generator is not configured; `generate` then fails
    /// with `StoryGeneratorError::Disabled` without any network traffic.
    fn enabled(&self) -> bool;

    /// Generate a story as non-empty display lines.
    ///
    /// # Errors
    ///
    /// Returns `StoryGeneratorError` when disabled, when the request fails, or
    /// when the reply contains no lines.
    async fn generate(
        &self,
        vocabulary: &StoryVocabulary,
    ) -> Result<Vec<String>, StoryGeneratorError>;
}

/// Story requests for a lesson, with the preconditions checked up front.
#[derive(Clone)]
pub struct StoryService {
    generator: Arc<dyn StoryGenerator>,
}

impl StoryService {
    #[must_use]
    pub fn new(generator: Arc<dyn StoryGenerator>) -> Self {
        Self { generator }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Arc::new(ChatStoryGenerator::from_env()))
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.generator.enabled()
    }

    /// Request a fresh story for `lesson`.
    ///
    /// # Errors
    ///
    /// Returns `StoryGeneratorError::Disabled` or `StoryGeneratorError::NoVocabulary`
    /// before any request is made, otherwise whatever the generator reports.
    pub async fn generate_for(&self, lesson: &Lesson) -> Result<Vec<String>, StoryGeneratorError> {
        if !self.generator.enabled() {
            return Err(StoryGeneratorError::Disabled);
        }
        let vocabulary = StoryVocabulary::from_lesson(lesson);
        if vocabulary.is_empty() {
            return Err(StoryGeneratorError::NoVocabulary);
        }

        tracing::info!(lesson = lesson.number(), "generating story");
        match self.generator.generate(&vocabulary).await {
            Ok(lines) => {
                tracing::info!(lesson = lesson.number(), lines = lines.len(), "story generated");
                Ok(lines)
            }
            Err(err) => {
                tracing::warn!(lesson = lesson.number(), error = %err, "story generation failed");
                Err(err)
            }
        }
    }
}
