use serde::{Deserialize, Serialize};

use crate::model::TokenId;
use crate::text::words;

/// One word of a scramble sentence with its stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    word: String,
}

impl Token {
    #[must_use]
    pub fn new(id: TokenId, word: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> TokenId {
        self.id
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// A playable story line: at least two tokens, in original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleSentence {
    text: String,
    tokens: Vec<Token>,
}

impl ScrambleSentence {
    /// Tokenize `line` as sentence number `index`.
    ///
    /// Returns `None` for lines with fewer than two tokens.
    #[must_use]
    pub fn parse(index: usize, line: &str) -> Option<Self> {
        let tokens: Vec<Token> = words(line)
            .enumerate()
            .map(|(position, word)| Token::new(TokenId::new(index, position), word))
            .collect();
        if tokens.len() < 2 {
            return None;
        }
        let text = tokens
            .iter()
            .map(Token::word)
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self { text, tokens })
    }

    /// Sentence text with single spaces between tokens.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when `attempt`, joined by single spaces, spells the sentence.
    #[must_use]
    pub fn matches(&self, attempt: &[Token]) -> bool {
        attempt
            .iter()
            .map(Token::word)
            .collect::<Vec<_>>()
            .join(" ")
            == self.text
    }

    /// True when at least two tokens carry different words.
    #[must_use]
    pub(crate) fn has_distinct_words(&self) -> bool {
        self.tokens
            .iter()
            .any(|token| token.word != self.tokens[0].word)
    }
}

/// Story lines that can be played, numbered in playing order.
#[must_use]
pub fn eligible_sentences(lines: &[String]) -> Vec<ScrambleSentence> {
    lines
        .iter()
        // Filter before numbering so sentence ids stay contiguous.
        .filter(|line| words(line).nth(1).is_some())
        .enumerate()
        .filter_map(|(index, line)| ScrambleSentence::parse(index, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assigns_positional_ids() {
        let sentence = ScrambleSentence::parse(2, "ឆ្មា ញ៉ាំ ត្រី").unwrap();
        let ids: Vec<TokenId> = sentence.tokens().iter().map(Token::id).collect();
        assert_eq!(
            ids,
            vec![TokenId::new(2, 0), TokenId::new(2, 1), TokenId::new(2, 2)]
        );
        assert_eq!(sentence.text(), "ឆ្មា ញ៉ាំ ត្រី");
    }

    #[test]
    fn parse_rejects_single_token_lines() {
        assert!(ScrambleSentence::parse(0, "ឆ្មា").is_none());
        assert!(ScrambleSentence::parse(0, "   ").is_none());
    }

    #[test]
    fn eligible_sentences_skip_short_lines_and_renumber() {
        let lines = vec![
            "ក".to_string(),
            "ឆ្មា ញ៉ាំ ត្រី".to_string(),
            String::new(),
            "ឆ្កែ  រត់".to_string(),
        ];
        let sentences = eligible_sentences(&lines);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].tokens()[0].id(), TokenId::new(1, 0));
        assert_eq!(sentences[1].text(), "ឆ្កែ រត់");
    }

    #[test]
    fn matches_compares_joined_words() {
        let sentence = ScrambleSentence::parse(0, "a b a").unwrap();
        let tokens = sentence.tokens();
        let swapped = vec![tokens[2].clone(), tokens[1].clone(), tokens[0].clone()];
        assert!(sentence.matches(tokens));
        assert!(sentence.matches(&swapped));
        assert!(!sentence.matches(&tokens[..2]));
    }
}
