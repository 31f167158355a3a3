//! Shared configuration and output value types.

use serde::{Deserialize, Serialize};

use crate::tables::emoticons::EmotionLabel;

/// Stemming strategy.
///
/// A closed set of interchangeable strategies, selected once at pipeline
/// construction time via [`CleanConfig::stemmer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemmerKind {
    /// Multilingual Snowball stemming, stop-word aware: tokens found in the
    /// ignore set pass through unstemmed.
    Snowball,
    /// Classic English Porter-family stemming, applied to every token.
    Porter,
}

impl StemmerKind {
    /// Returns the user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snowball => "snowball",
            Self::Porter => "porter",
        }
    }
}

impl Default for StemmerKind {
    fn default() -> Self {
        Self::Snowball
    }
}

/// Configuration for a [`Cleaner`](crate::pipeline::runner::Cleaner).
///
/// All fields have defaults tuned for English social-media text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Language for stop-word defaults and Snowball stemming (`"en"`, `"de"`, …).
    #[serde(default = "default_language")]
    pub language: String,

    /// Replacement character for the digit-masking stage.
    #[serde(default = "default_mask_char")]
    pub mask_char: char,

    /// Prefixes whose words the tag-stripping stage removes (`"#"`, `"@"`).
    #[serde(default = "default_tag_prefixes")]
    pub tag_prefixes: Vec<String>,

    /// Stemming strategy for the root-form reduction stage.
    #[serde(default)]
    pub stemmer: StemmerKind,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_mask_char() -> char {
    'd'
}

fn default_tag_prefixes() -> Vec<String> {
    vec!["#".to_string(), "@".to_string()]
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            mask_char: default_mask_char(),
            tag_prefixes: default_tag_prefixes(),
            stemmer: StemmerKind::default(),
        }
    }
}

impl CleanConfig {
    /// Set the language used for stop-word defaults and Snowball stemming.
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    /// Set the digit-mask replacement character.
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Set the prefixes stripped by the tag-removal stage.
    pub fn with_tag_prefixes(mut self, prefixes: &[&str]) -> Self {
        self.tag_prefixes = prefixes.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Set the stemming strategy.
    pub fn with_stemmer(mut self, stemmer: StemmerKind) -> Self {
        self.stemmer = stemmer;
        self
    }
}

/// Result of running a full pipeline over one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanOutput {
    /// The normalized text.
    pub text: String,
    /// Labels extracted by the emoticon stage, in scan order, duplicates
    /// preserved. Empty when the pipeline has no emoticon stage.
    pub emotions: Vec<EmotionLabel>,
}
