//! Tokenizer contract and the whitespace baseline
//!
//! Every tokenizer turns a text into a [`TokenSequence`] whose offsets are
//! `[begin, end)` character ranges into that text. [`offsets`] rebuilds those
//! ranges from a plain token list by sequential substring search.

use crate::{
    error::{Result, TokenizeError},
    source::SourceText,
    token::{Token, TokenSequence},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ========= Core trait =========

/// Text to token-sequence conversion
///
/// Implementations are read-only after construction, so one instance can be
/// shared across threads and called concurrently.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text`
    ///
    /// Empty or all-whitespace input yields an empty sequence.
    fn tokenize(&self, text: &str) -> Result<TokenSequence>;

    /// Tokenize several texts, preserving input order
    ///
    /// Runs on the rayon thread pool when the `parallel` feature is enabled.
    fn tokenize_batch<S>(&self, texts: &[S]) -> Result<Vec<TokenSequence>>
    where
        S: AsRef<str> + Sync,
        Self: Sized,
    {
        #[cfg(feature = "parallel")]
        {
            texts
                .par_iter()
                .map(|text| self.tokenize(text.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            texts
                .iter()
                .map(|text| self.tokenize(text.as_ref()))
                .collect()
        }
    }
}

// ========= Offset reconstruction =========

/// Rebuild `[begin, end)` character offsets for tokens that occur in `text` in order
///
/// Each token is searched for at or after the end of the previous match.
/// A token that cannot be found is an invariant violation by the caller and
/// is reported as [`TokenizeError::TokenNotFound`].
///
/// ```
/// let offsets = entok_core::offsets("Hello, world!", &["Hello", ",", "world", "!"]).unwrap();
/// assert_eq!(offsets, vec![(0, 5), (5, 6), (7, 12), (12, 13)]);
/// ```
pub fn offsets<S: AsRef<str>>(text: &str, tokens: &[S]) -> Result<Vec<(usize, usize)>> {
    let src = SourceText::new(text);
    offsets_in(&src, tokens)
}

fn offsets_in<S: AsRef<str>>(src: &SourceText<'_>, tokens: &[S]) -> Result<Vec<(usize, usize)>> {
    let text = src.as_str();
    let mut byte_end = 0;

    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            let found = text[byte_end..]
                .find(token)
                .ok_or_else(|| TokenizeError::TokenNotFound {
                    token: token.to_string(),
                    from: src.char_index(byte_end),
                })?;

            let byte_begin = byte_end + found;
            byte_end = byte_begin + token.len();
            Ok((src.char_index(byte_begin), src.char_index(byte_end)))
        })
        .collect()
}

// ========= Whitespace baseline =========

/// Splits on runs of whitespace and nothing else
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new whitespace tokenizer
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenSequence> {
        let src = SourceText::new(text);
        let pieces: Vec<&str> = text.split_whitespace().collect();
        let spans = offsets_in(&src, &pieces)?;

        Ok(pieces
            .into_iter()
            .zip(spans)
            .map(|(piece, (begin, end))| Token::new(piece, begin, end))
            .collect::<Vec<_>>()
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_basic() {
        let got = offsets("Hello, world!", &["Hello", ",", "world", "!"]).unwrap();
        assert_eq!(got, vec![(0, 5), (5, 6), (7, 12), (12, 13)]);
    }

    #[test]
    fn test_offsets_repeated_token() {
        // The second "a" must be found after the first one
        let got = offsets("a b a", &["a", "b", "a"]).unwrap();
        assert_eq!(got, vec![(0, 1), (2, 3), (4, 5)]);
    }

    #[test]
    fn test_offsets_are_character_based() {
        let text = "caf\u{00E9} \u{2014} ok";
        let got = offsets(text, &["caf\u{00E9}", "\u{2014}", "ok"]).unwrap();
        assert_eq!(got, vec![(0, 4), (5, 6), (7, 9)]);
    }

    #[test]
    fn test_offsets_missing_token() {
        let err = offsets("Hello world", &["Hello", "there"]).unwrap_err();
        match err {
            TokenizeError::TokenNotFound { token, from } => {
                assert_eq!(token, "there");
                assert_eq!(from, 5);
            }
            other => panic!("Expected TokenNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_offsets_out_of_order() {
        assert!(offsets("one two", &["two", "one"]).is_err());
    }

    #[test]
    fn test_space_tokenizer() {
        let seq = SpaceTokenizer::new()
            .tokenize("  Hello,  world!\tbye\n")
            .unwrap();
        assert_eq!(seq.tokens(), vec!["Hello,", "world!", "bye"]);
        assert_eq!(seq.offsets(), vec![(2, 8), (10, 16), (17, 20)]);
    }

    #[test]
    fn test_space_tokenizer_blank_input() {
        let tokenizer = SpaceTokenizer::new();
        assert!(tokenizer.tokenize("").unwrap().is_empty());
        assert!(tokenizer.tokenize(" \t\n ").unwrap().is_empty());
    }

    #[test]
    fn test_batch_preserves_order() {
        let texts = ["b a", "c", "", "d e f"];
        let out = SpaceTokenizer::new().tokenize_batch(&texts).unwrap();
        let lens: Vec<usize> = out.iter().map(TokenSequence::len).collect();
        assert_eq!(lens, vec![2, 1, 0, 3]);
        assert_eq!(out[3].tokens(), vec!["d", "e", "f"]);
    }

    #[test]
    fn test_trait_object() {
        let tokenizer: Box<dyn Tokenizer> = Box::new(SpaceTokenizer);
        assert_eq!(tokenizer.tokenize("x y").unwrap().len(), 2);
    }
}
