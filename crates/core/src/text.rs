//! Whitespace tokenization shared by pacing progress and the scramble game.

/// Splits a line into whitespace-delimited words, dropping empty pieces.
pub fn words(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Number of whitespace-delimited words in a line.
#[must_use]
pub fn word_count(line: &str) -> usize {
    words(line).count()
}

/// Collapses runs of whitespace into single spaces and trims the ends.
#[must_use]
pub fn normalize(line: &str) -> String {
    words(line).collect::<Vec<_>>().join(" ")
}
