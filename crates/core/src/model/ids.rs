use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a lesson inside the loaded catalog
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LessonIndex(usize);

impl LessonIndex {
    /// Creates a new `LessonIndex`
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying position
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

/// Stable identity of a scramble token.
///
/// Derived from the sentence position and the token position inside that
/// sentence, so two tokens with the same text never collide.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId {
    sentence: usize,
    position: usize,
}

impl TokenId {
    #[must_use]
    pub fn new(sentence: usize, position: usize) -> Self {
        Self { sentence, position }
    }

    #[must_use]
    pub fn sentence(&self) -> usize {
        self.sentence
    }

    /// Position of the token in the original sentence order.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Debug for LessonIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonIndex({})", self.0)
    }
}

impl fmt::Display for LessonIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({}-{})", self.sentence, self.position)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.sentence, self.position)
    }
}

impl From<usize> for LessonIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<LessonIndex> for usize {
    fn from(value: LessonIndex) -> Self {
        value.0
    }
}

/// Error returned when parsing identifiers from strings fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for LessonIndex {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .map(Self)
            .map_err(|_| ParseIdError { kind: "LessonIndex" })
    }
}

impl FromStr for TokenId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseIdError { kind: "TokenId" };
        let (sentence, position) = s.split_once('-').ok_or_else(err)?;
        Ok(Self {
            sentence: sentence.parse().map_err(|_| err())?,
            position: position.parse().map_err(|_| err())?,
        })
    }
}
