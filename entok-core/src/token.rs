//! Token and token sequence types

use crate::error::Result;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A finalized token and its `[begin, end)` character span in the source text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Token text, always equal to the source characters in `begin..end`
    pub text: String,
    /// Character offset of the first character (inclusive)
    pub begin: usize,
    /// Character offset past the last character (exclusive)
    pub end: usize,
}

impl Token {
    /// Create a new token
    pub fn new<S: Into<String>>(text: S, begin: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            begin,
            end,
        }
    }

    /// The `(begin, end)` offset pair
    #[inline]
    pub fn offset(&self) -> (usize, usize) {
        (self.begin, self.end)
    }

    /// Number of characters covered by the token
    #[inline]
    pub fn char_len(&self) -> usize {
        self.end - self.begin
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{},{})", self.text, self.begin, self.end)
    }
}

/// Ordered tokens produced from one input text
///
/// Tokens appear in reading order with strictly increasing, non-overlapping
/// offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sequence holds no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token texts in order
    pub fn tokens(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// `(begin, end)` offsets in order, parallel to [`tokens`](Self::tokens)
    pub fn offsets(&self) -> Vec<(usize, usize)> {
        self.tokens.iter().map(Token::offset).collect()
    }

    /// Split into the parallel `(tokens, offsets)` lists
    pub fn into_parts(self) -> (Vec<String>, Vec<(usize, usize)>) {
        self.tokens
            .into_iter()
            .map(|t| {
                let offset = t.offset();
                (t.text, offset)
            })
            .unzip()
    }

    /// Serialize as a JSON array of `{text, begin, end}` objects
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Access the underlying tokens
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub(crate) fn from_vec(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        Self::from_vec(tokens)
    }
}

impl IntoIterator for TokenSequence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenSequence {
        TokenSequence::from(vec![
            Token::new("Hello", 0, 5),
            Token::new(",", 5, 6),
            Token::new("world", 7, 12),
        ])
    }

    #[test]
    fn test_parallel_views() {
        let seq = sample();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.tokens(), vec!["Hello", ",", "world"]);
        assert_eq!(seq.offsets(), vec![(0, 5), (5, 6), (7, 12)]);
    }

    #[test]
    fn test_into_parts() {
        let (tokens, offsets) = sample().into_parts();
        assert_eq!(tokens, vec!["Hello", ",", "world"]);
        assert_eq!(offsets, vec![(0, 5), (5, 6), (7, 12)]);
    }

    #[test]
    fn test_json_shape() {
        let json = TokenSequence::from(vec![Token::new("hi", 0, 2)])
            .to_json()
            .unwrap();
        assert_eq!(json, r#"[{"text":"hi","begin":0,"end":2}]"#);
    }

    #[test]
    fn test_empty_sequence() {
        let seq = TokenSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.into_parts(), (Vec::<String>::new(), Vec::new()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::new("kg", 2, 4).to_string(), "kg[2,4)");
    }
}
