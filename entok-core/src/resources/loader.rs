//! Word-table loaders
//!
//! Tables come from three places: the embedded English config, a TOML
//! string, or a directory of plain-text word lists (one entry per line).

use crate::{
    error::{Result, TokenizeError},
    resources::{config::ResourceConfig, tables::WordTables},
};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Embedded English resources
const ENGLISH_TOML: &str = include_str!("../../configs/english.toml");

pub const ABBREVIATION_PERIOD_FILE: &str = "english_abbreviation_period.txt";
pub const APOSTROPHE_FRONT_FILE: &str = "english_apostrophe_front.txt";
pub const HYPHEN_PREFIX_FILE: &str = "english_hyphen_prefix.txt";
pub const HYPHEN_SUFFIX_FILE: &str = "english_hyphen_suffix.txt";
pub const CONCAT_WORDS_FILE: &str = "english_concat_words.txt";

impl WordTables {
    /// The embedded default English tables
    pub fn english() -> Result<Self> {
        Self::from_toml_str(ENGLISH_TOML)
    }

    /// Parse a TOML resource config and build tables from it
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: ResourceConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Load tables from a directory of word-list files
    ///
    /// Every file is required; see the `*_FILE` constants for their names.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut tables = Self::new();

        tables.extend_abbreviation_period(read_lines(&dir.join(ABBREVIATION_PERIOD_FILE))?);
        tables.extend_apostrophe_front(read_lines(&dir.join(APOSTROPHE_FRONT_FILE))?);
        tables.extend_hyphen_prefix(read_lines(&dir.join(HYPHEN_PREFIX_FILE))?);
        tables.extend_hyphen_suffix(read_lines(&dir.join(HYPHEN_SUFFIX_FILE))?);
        tables.extend_concat_words(read_lines(&dir.join(CONCAT_WORDS_FILE))?);

        log::debug!(
            "loaded word tables from {}: {}",
            dir.display(),
            tables.summary()
        );
        Ok(tables)
    }
}

/// Non-blank, trimmed lines of a file
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| TokenizeError::Resource {
        path: PathBuf::from(path),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
