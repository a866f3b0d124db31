//! Rule-based English tokenizer
//!
//! Text is cut at whitespace, then each span is narrowed step by step:
//!
//! 1. a single character or an all-alphanumeric span is one token;
//! 2. otherwise the [`PatternLibrary`] may carve out a non-decomposable piece;
//! 3. otherwise the [`SymbolSegmenter`] may cut at a symbol run;
//! 4. otherwise the span is one token.
//!
//! Steps 2 and 3 partition the span into a left remainder, an accepted
//! middle piece, and a right remainder; both remainders are resolved the
//! same way. Every accepted piece goes through the [`PostProcessor`].

pub mod patterns;
pub mod postprocess;
pub mod symbol;

pub use patterns::{PatternKind, PatternLibrary, PatternMatch};
pub use postprocess::{MergeRule, PostProcessor, SplitRule};
pub use symbol::{SymbolClass, SymbolMatch, SymbolSegmenter};

use crate::{
    error::Result,
    resources::WordTables,
    source::SourceText,
    token::{Token, TokenSequence},
    tokenizer::Tokenizer,
};

/// The default English tokenizer
///
/// # Example
///
/// ```rust
/// use entok_core::{EnglishTokenizer, Tokenizer};
///
/// let tokenizer = EnglishTokenizer::new().unwrap();
/// let seq = tokenizer.tokenize("Hello, world!").unwrap();
///
/// assert_eq!(seq.tokens(), vec!["Hello", ",", "world", "!"]);
/// assert_eq!(seq.offsets(), vec![(0, 5), (5, 6), (7, 12), (12, 13)]);
/// ```
#[derive(Debug, Clone)]
pub struct EnglishTokenizer {
    patterns: PatternLibrary,
    symbols: SymbolSegmenter,
    post: PostProcessor,
}

impl EnglishTokenizer {
    /// Create a tokenizer backed by the embedded English word tables
    pub fn new() -> Result<Self> {
        Self::with_tables(WordTables::english()?)
    }

    /// Create a tokenizer backed by the given word tables
    pub fn with_tables(tables: WordTables) -> Result<Self> {
        Ok(Self {
            patterns: PatternLibrary::new()?,
            symbols: SymbolSegmenter::new(),
            post: PostProcessor::new(tables)?,
        })
    }

    /// The word tables this tokenizer consults
    pub fn tables(&self) -> &WordTables {
        self.post.tables()
    }

    /// Tokenize `text`; never fails
    pub fn tokenize_text(&self, text: &str) -> TokenSequence {
        let src = SourceText::new(text);
        let mut out = Vec::new();

        // no valid token in the input text
        let (Some(first), Some(last)) = (src.first_non_space(), src.last_non_space_end()) else {
            return TokenSequence::new();
        };

        let mut begin = first;
        let interior = &text[src.byte_offset(first)..src.byte_offset(last)];
        for (end, c) in (first..).zip(interior.chars()).skip(1) {
            if c.is_whitespace() {
                self.tokenize_aux(&mut out, &src, begin, end);
                begin = end + 1;
            }
        }

        self.tokenize_aux(&mut out, &src, begin, last);
        TokenSequence::from(out)
    }

    /// Resolve the whitespace-free span `[begin, end)`; false if it is empty
    ///
    /// The left remainder of each accepted piece is resolved recursively; the
    /// right remainder is resolved by the same loop, so recursion depth does
    /// not grow with the number of pieces.
    fn tokenize_aux(&self, out: &mut Vec<Token>, src: &SourceText<'_>, begin: usize, end: usize) -> bool {
        if begin >= end || end > src.len() {
            return false;
        }

        // no pattern is anchored at the start, so a span without a pattern
        // match has none in any of its suffixes either
        let mut find_patterns = true;
        let mut begin = begin;

        while begin < end {
            let token = src.slice(begin, end);

            if end - begin == 1 || token.chars().all(char::is_alphanumeric) {
                self.post.add_token(out, token, begin, end);
                break;
            }

            let Some((idx, lst)) = self.split_span(src, begin, end, &mut find_patterns) else {
                self.post.add_token(out, token, begin, end);
                break;
            };

            self.tokenize_aux(out, src, begin, idx);
            self.post.add_token(out, src.slice(idx, lst), idx, lst);
            begin = lst;
        }

        true
    }

    /// Piece `[idx, lst)` to carve out of `[begin, end)`: a pattern match, else a symbol run
    fn split_span(
        &self,
        src: &SourceText<'_>,
        begin: usize,
        end: usize,
        find_patterns: &mut bool,
    ) -> Option<(usize, usize)> {
        if *find_patterns {
            let token = src.slice(begin, end);
            match self.patterns.find(token) {
                Some(m) => {
                    log::trace!("{} at [{},{}) in {token:?}", m.kind, begin + m.start, begin + m.end);
                    return Some((begin + m.start, begin + m.end));
                }
                None => *find_patterns = false,
            }
        }

        let m = self.symbols.find_in(src.chars(begin, end))?;
        log::trace!("{} at [{},{})", m.class.name(), begin + m.start, begin + m.end);
        Some((begin + m.start, begin + m.end))
    }
}

impl Tokenizer for EnglishTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenSequence> {
        Ok(self.tokenize_text(text))
    }
}
