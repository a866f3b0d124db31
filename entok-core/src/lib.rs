//! Rule-based English word tokenization with exact character offsets
//!
//! This crate converts raw text into tokens plus their `[begin, end)`
//! character offsets in the original text. Two tokenizers share one
//! interface:
//!
//! - [`SpaceTokenizer`]: splits on whitespace only.
//! - [`EnglishTokenizer`]: a cascade of lexical rules (hyperlinks, e-mail
//!   addresses, emoticons, list markers, contractions, symbol boundaries with
//!   numeric exceptions) followed by merge/split post-processing
//!   (abbreviation periods, acronyms, hyphenated compounds, unit suffixes,
//!   concatenated words).
//!
//! For every token, `text[begin..end] == token` when offsets are read as
//! character positions, and the tokens cover exactly the non-whitespace
//! characters of the input.
//!
//! # Architecture
//!
//! - **resources**: word tables injected at construction (TOML, word-list
//!   directory, or the embedded English defaults)
//! - **english**: pattern library, symbol segmenter, post-processor, and the
//!   recursive span resolver that ties them together
//! - **tokenizer**: the shared [`Tokenizer`] trait and offset reconstruction
//!
//! # Example
//!
//! ```rust
//! use entok_core::{EnglishTokenizer, Tokenizer};
//!
//! let tokenizer = EnglishTokenizer::new().unwrap();
//! let (tokens, offsets) = tokenizer.tokenize("don't stop").unwrap().into_parts();
//!
//! assert_eq!(tokens, vec!["do", "n't", "stop"]);
//! assert_eq!(offsets, vec![(0, 2), (2, 5), (6, 10)]);
//! ```

pub mod chars;
pub mod english;
pub mod error;
pub mod resources;
pub mod source;
pub mod token;
pub mod tokenizer;

pub use english::EnglishTokenizer;
pub use error::{Result, TokenizeError};
pub use resources::{ResourceConfig, WordTables};
pub use source::SourceText;
pub use token::{Token, TokenSequence};
pub use tokenizer::{offsets, SpaceTokenizer, Tokenizer};
