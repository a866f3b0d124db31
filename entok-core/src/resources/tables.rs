//! Runtime word tables for the English tokenizer
//!
//! All tables are keyed by lower-cased word forms and are read-only once
//! built. Lookups never allocate.

use crate::{
    error::{Result, TokenizeError},
    resources::config::ResourceConfig,
};
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};

/// Cumulative end offsets of the pieces of a concatenated word
///
/// `"cannot"` -> `[3, 6]` -> `"can"`, `"not"`.
pub type SplitOffsets = SmallVec<[usize; 4]>;

/// The word sets and split table consulted while tokenizing
#[derive(Debug, Clone, Default)]
pub struct WordTables {
    abbreviation_period: HashSet<String>,
    apostrophe_front: HashSet<String>,
    hyphen_prefix: HashSet<String>,
    hyphen_suffix: HashSet<String>,
    concat_words: HashMap<String, SplitOffsets>,
}

impl WordTables {
    /// Empty tables: every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parsed resource configuration
    pub fn from_config(config: &ResourceConfig) -> Result<Self> {
        config.validate().map_err(TokenizeError::Config)?;

        let mut tables = Self::new();
        tables.extend_abbreviation_period(config.abbreviation_words());
        tables.extend_apostrophe_front(config.apostrophe.front.iter());
        tables.extend_hyphen_prefix(config.hyphen.prefixes.iter());
        tables.extend_hyphen_suffix(config.hyphen.suffixes.iter());
        tables.extend_concat_words(config.concat.words.iter());

        log::debug!(
            "built word tables for {} ({}): {}",
            config.metadata.name,
            config.metadata.code,
            tables.summary()
        );
        Ok(tables)
    }

    /// Add words that absorb a following period
    pub fn extend_abbreviation_period<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        insert_words(&mut self.abbreviation_period, words);
    }

    /// Add contraction bodies that attach to a preceding apostrophe
    pub fn extend_apostrophe_front<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        insert_words(&mut self.apostrophe_front, words);
    }

    /// Add prefixes that keep a hyphenated compound together
    pub fn extend_hyphen_prefix<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        insert_words(&mut self.hyphen_prefix, words);
    }

    /// Add suffixes that keep a hyphenated compound together
    pub fn extend_hyphen_suffix<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        insert_words(&mut self.hyphen_suffix, words);
    }

    /// Add concatenated words written with spaces at their split points
    pub fn extend_concat_words<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let entry = entry.as_ref();
            match parse_concat_entry(entry) {
                Some((word, offsets)) => {
                    self.concat_words.insert(word, offsets);
                }
                None if entry.trim().is_empty() => {}
                None => log::warn!("skipping concatenated word without a split point: {entry:?}"),
            }
        }
    }

    #[inline]
    pub fn is_abbreviation_period(&self, word: &str) -> bool {
        self.abbreviation_period.contains(word)
    }

    #[inline]
    pub fn is_apostrophe_front(&self, word: &str) -> bool {
        self.apostrophe_front.contains(word)
    }

    #[inline]
    pub fn is_hyphen_prefix(&self, word: &str) -> bool {
        self.hyphen_prefix.contains(word)
    }

    #[inline]
    pub fn is_hyphen_suffix(&self, word: &str) -> bool {
        self.hyphen_suffix.contains(word)
    }

    /// Split offsets for a lower-cased concatenated word
    #[inline]
    pub fn concat_split(&self, word: &str) -> Option<&SplitOffsets> {
        self.concat_words.get(word)
    }

    /// Table sizes, for logging
    pub fn summary(&self) -> String {
        format!(
            "abbreviation_period={} apostrophe_front={} hyphen_prefix={} hyphen_suffix={} concat_words={}",
            self.abbreviation_period.len(),
            self.apostrophe_front.len(),
            self.hyphen_prefix.len(),
            self.hyphen_suffix.len(),
            self.concat_words.len()
        )
    }
}

fn insert_words<I, S>(set: &mut HashSet<String>, words: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    set.extend(
        words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty()),
    );
}

/// Parse a concatenated-word entry such as `"can not"`
///
/// Returns the joined, lower-cased word and the cumulative character end
/// offset of each piece. Entries without an interior space have nothing to
/// split and yield `None`.
pub fn parse_concat_entry(entry: &str) -> Option<(String, SplitOffsets)> {
    let pieces: Vec<&str> = entry.split_whitespace().collect();
    if pieces.len() < 2 {
        return None;
    }

    let mut word = String::new();
    let mut offsets = SplitOffsets::new();
    let mut end = 0;
    for piece in pieces {
        let piece = piece.to_lowercase();
        end += piece.chars().count();
        word.push_str(&piece);
        offsets.push(end);
    }

    Some((word, offsets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_parse_concat_entry() {
        let (word, offsets) = parse_concat_entry("can not").unwrap();
        assert_eq!(word, "cannot");
        let expected: SplitOffsets = smallvec![3, 6];
        assert_eq!(offsets, expected);

        let (word, offsets) = parse_concat_entry("wha dd ya").unwrap();
        assert_eq!(word, "whaddya");
        assert_eq!(offsets.as_slice(), &[3, 5, 7]);
    }

    #[test]
    fn test_parse_concat_entry_rejects_single_piece() {
        assert!(parse_concat_entry("cannot").is_none());
        assert!(parse_concat_entry("   ").is_none());
    }

    #[test]
    fn test_lookups_are_lowercase() {
        let mut tables = WordTables::new();
        tables.extend_abbreviation_period(["Dr", " Prof "]);
        tables.extend_concat_words(["Can Not", "", "single"]);

        assert!(tables.is_abbreviation_period("dr"));
        assert!(tables.is_abbreviation_period("prof"));
        assert!(!tables.is_abbreviation_period("Dr"));
        assert_eq!(tables.concat_split("cannot").unwrap().as_slice(), &[3, 6]);
        assert!(tables.concat_split("single").is_none());
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let err = WordTables::from_config(&ResourceConfig::default()).unwrap_err();
        assert!(matches!(err, TokenizeError::Config(_)));
    }
}
