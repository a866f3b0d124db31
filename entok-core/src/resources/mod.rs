//! Word resources for the English tokenizer
//!
//! The tokenizer consults five read-only lookups: the abbreviation-period
//! set, the apostrophe-front set, the hyphen prefix and suffix sets, and the
//! concatenated-word split table. They are built once, injected into the
//! tokenizer, and never mutated afterwards.

pub mod config;
pub mod loader;
pub mod tables;

pub use config::ResourceConfig;
pub use loader::{
    ABBREVIATION_PERIOD_FILE, APOSTROPHE_FRONT_FILE, CONCAT_WORDS_FILE, HYPHEN_PREFIX_FILE,
    HYPHEN_SUFFIX_FILE,
};
pub use tables::{parse_concat_entry, SplitOffsets, WordTables};
