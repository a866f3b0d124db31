//! Configuration structures and validation
//!
//! This module defines the TOML schema for tokenizer word resources.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root resource configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    #[serde(default)]
    pub apostrophe: Apostrophe,
    #[serde(default)]
    pub hyphen: Hyphen,
    #[serde(default)]
    pub concat: Concat,
}

/// Resource metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Words that keep a following period, grouped by category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Contraction bodies that attach to a preceding apostrophe ('cause, 'tis)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Apostrophe {
    #[serde(default)]
    pub front: Vec<String>,
}

/// Affixes that keep a hyphenated compound together
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hyphen {
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

/// Concatenated words, written with spaces at their split points ("can not")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Concat {
    #[serde(default)]
    pub words: Vec<String>,
}

impl ResourceConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Resource config has an empty language code".to_string());
        }

        Ok(())
    }

    /// All abbreviation words across categories
    pub fn abbreviation_words(&self) -> impl Iterator<Item = &str> {
        self.abbreviations
            .categories
            .values()
            .flat_map(|words| words.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_config_deserialize() {
        let toml_str = r#"
            [metadata]
            code = "en"
            name = "English"

            [abbreviations]
            titles = ["Dr", "Mr", "Mrs"]
            common = ["etc", "vs"]

            [apostrophe]
            front = ["cause", "tis"]

            [hyphen]
            prefixes = ["anti"]
            suffixes = ["ish"]

            [concat]
            words = ["can not"]
        "#;

        let config: ResourceConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.metadata.code, "en");
        assert_eq!(config.abbreviations.categories["titles"].len(), 3);
        assert_eq!(config.abbreviation_words().count(), 5);
        assert_eq!(config.apostrophe.front, vec!["cause", "tis"]);
        assert_eq!(config.hyphen.prefixes, vec!["anti"]);
        assert_eq!(config.concat.words, vec!["can not"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optional_sections_default() {
        let config: ResourceConfig = toml::from_str(
            r#"
            [metadata]
            code = "en"
            name = "Bare"
        "#,
        )
        .unwrap();
        assert_eq!(config.abbreviation_words().count(), 0);
        assert!(config.hyphen.suffixes.is_empty());
        assert!(config.concat.words.is_empty());
    }

    #[test]
    fn test_validate_empty_code() {
        let config = ResourceConfig::default();
        assert!(config.validate().is_err());
    }
}
