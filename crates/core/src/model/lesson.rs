use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::activity::{Activity, ActivityAvailability};
use crate::model::ids::LessonIndex;
use crate::scramble::eligible_sentences;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson catalog is empty")]
    EmptyCatalog,

    #[error("lesson {index} has an empty lesson number")]
    MissingNumber { index: usize },

    #[error("lesson {index} has an empty title")]
    MissingTitle { index: usize },

    #[error("no lesson at position {index}")]
    NotFound { index: usize },
}

//
// ─── STORY ─────────────────────────────────────────────────────────────────────
//

/// A short reading passage attached to a lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: Vec<String>,
}

impl Story {
    #[must_use]
    pub fn new(title: impl Into<String>, content: Vec<String>) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Story lines in reading order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.content
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// One textbook lesson: syllables, words and a story.
///
/// Field names follow the lesson data file (`lesson_number`, `source_page`).
/// Missing vocabulary lists deserialize as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    lesson_number: String,
    title: String,
    #[serde(default)]
    source_page: u32,
    #[serde(default)]
    syllables: Vec<String>,
    #[serde(default)]
    words: Vec<String>,
    #[serde(default)]
    story: Story,
}

impl Lesson {
    #[must_use]
    pub fn new(
        lesson_number: impl Into<String>,
        title: impl Into<String>,
        source_page: u32,
        syllables: Vec<String>,
        words: Vec<String>,
        story: Story,
    ) -> Self {
        Self {
            lesson_number: lesson_number.into(),
            title: title.into(),
            source_page,
            syllables,
            words,
            story,
        }
    }

    #[must_use]
    pub fn number(&self) -> &str {
        &self.lesson_number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn source_page(&self) -> u32 {
        self.source_page
    }

    #[must_use]
    pub fn syllables(&self) -> &[String] {
        &self.syllables
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// Items drilled by a practice activity, or `None` for activities that
    /// do not run on a flat item list.
    #[must_use]
    pub fn practice_items(&self, activity: Activity) -> Option<&[String]> {
        match activity {
            Activity::Syllables => Some(&self.syllables),
            Activity::Words => Some(&self.words),
            Activity::Story => Some(self.story.lines()),
            Activity::WordScramble | Activity::AiStory => None,
        }
    }

    /// True when there is any vocabulary to build a generated story from.
    #[must_use]
    pub fn has_vocabulary(&self) -> bool {
        !self.syllables.is_empty() || !self.words.is_empty() || !self.story.is_empty()
    }

    /// Which activities can be entered for this lesson.
    #[must_use]
    pub fn availability(&self) -> ActivityAvailability {
        ActivityAvailability {
            syllables: !self.syllables.is_empty(),
            words: !self.words.is_empty(),
            story: !self.story.is_empty(),
            word_scramble: !eligible_sentences(self.story.lines()).is_empty(),
            ai_story: self.has_vocabulary(),
        }
    }

    fn validate(&self, index: usize) -> Result<(), LessonError> {
        if self.lesson_number.trim().is_empty() {
            return Err(LessonError::MissingNumber { index });
        }
        if self.title.trim().is_empty() {
            return Err(LessonError::MissingTitle { index });
        }
        Ok(())
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Top-level shape of the lesson data file: `{ "lessons": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonData {
    pub lessons: Vec<Lesson>,
}

/// Validated, immutable list of lessons in textbook order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    /// Validate lesson data into a catalog.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::EmptyCatalog` when there are no lessons, or the first
    /// missing-field error found.
    pub fn new(data: LessonData) -> Result<Self, LessonError> {
        if data.lessons.is_empty() {
            return Err(LessonError::EmptyCatalog);
        }
        for (index, lesson) in data.lessons.iter().enumerate() {
            lesson.validate(index)?;
        }
        Ok(Self {
            lessons: data.lessons,
        })
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Look up a lesson by catalog position.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::NotFound` when the index is out of range.
    pub fn get(&self, index: LessonIndex) -> Result<&Lesson, LessonError> {
        self.lessons
            .get(index.value())
            .ok_or(LessonError::NotFound {
                index: index.value(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (LessonIndex, &Lesson)> {
        self.lessons
            .iter()
            .enumerate()
            .map(|(index, lesson)| (LessonIndex::new(index), lesson))
    }
}
