//! Error types for tokenization and resource loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the tokenizers and their resource loaders
///
/// Tokenizing with [`EnglishTokenizer`](crate::EnglishTokenizer) never fails;
/// the variants below come from offset reconstruction, construction, and I/O.
#[derive(Error, Debug)]
pub enum TokenizeError {
    /// A token passed to [`offsets`](crate::offsets) does not occur, in order, in the text
    #[error("token not found in source text: {token:?} (searched from character {from})")]
    TokenNotFound {
        /// The token that could not be located
        token: String,
        /// Character offset where the search started
        from: usize,
    },

    /// A word-list file could not be read
    #[error("failed to read resource {}: {source}", path.display())]
    Resource {
        /// Path of the file being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Resource configuration failed validation
    #[error("configuration error: {0}")]
    Config(String),

    /// Resource TOML could not be parsed
    #[error("failed to parse resource config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A built-in pattern failed to compile
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizeError>;
