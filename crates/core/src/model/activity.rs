use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Things a child can do with a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Activity {
    Syllables,
    Words,
    Story,
    WordScramble,
    AiStory,
}

impl Activity {
    pub const ALL: [Activity; 5] = [
        Activity::Syllables,
        Activity::Words,
        Activity::Story,
        Activity::WordScramble,
        Activity::AiStory,
    ];

    /// Stable slug used in routes.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Activity::Syllables => "syllables",
            Activity::Words => "words",
            Activity::Story => "story",
            Activity::WordScramble => "word-scramble",
            Activity::AiStory => "ai-story",
        }
    }

    /// Khmer label shown on activity buttons and screen titles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Activity::Syllables => "ការអានព្យាង្គ",
            Activity::Words => "ការអានពាក្យ",
            Activity::Story => "ការអានអត្ថបទខ្លី",
            Activity::WordScramble => "រៀបពាក្យ",
            Activity::AiStory => "AI Story Time",
        }
    }

    /// Activities that drill a flat item list on the practice screen.
    #[must_use]
    pub fn is_item_practice(self) -> bool {
        matches!(self, Activity::Syllables | Activity::Words)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned for unknown activity slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownActivity(pub String);

impl fmt::Display for UnknownActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown activity: {}", self.0)
    }
}

impl std::error::Error for UnknownActivity {}

impl FromStr for Activity {
    type Err = UnknownActivity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activity::ALL
            .into_iter()
            .find(|activity| activity.slug() == s)
            .ok_or_else(|| UnknownActivity(s.to_string()))
    }
}

/// Per-lesson gate for each activity entry point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ActivityAvailability {
    pub syllables: bool,
    pub words: bool,
    pub story: bool,
    pub word_scramble: bool,
    pub ai_story: bool,
}

impl ActivityAvailability {
    #[must_use]
    pub fn allows(&self, activity: Activity) -> bool {
        match activity {
            Activity::Syllables => self.syllables,
            Activity::Words => self.words,
            Activity::Story => self.story,
            Activity::WordScramble => self.word_scramble,
            Activity::AiStory => self.ai_story,
        }
    }

    #[must_use]
    pub fn any(&self) -> bool {
        Activity::ALL.into_iter().any(|activity| self.allows(activity))
    }
}
