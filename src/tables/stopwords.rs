//! Stop-word sets.
//!
//! Membership is an exact string match against the set as provided — no case
//! folding happens inside the set. Callers that want case-insensitive
//! filtering pre-lowercase both their text and their word list consistently.
//! Language defaults come from the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// An immutable set of stop words.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: FxHashSet<String>,
}

impl StopWordSet {
    /// Create an empty set (nothing is filtered).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from a word list, kept verbatim.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Default stop words for a language.
    ///
    /// Accepts two-letter codes or full names; unknown languages fall back to
    /// English. The crate's lists are lowercase.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => LANGUAGE::English,
        };
        Self {
            words: get(lang).iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add words to the set, kept verbatim.
    pub fn add_words(&mut self, words: &[&str]) {
        for word in words {
            self.words.insert(word.to_string());
        }
    }

    /// Remove words from the set.
    pub fn remove_words(&mut self, words: &[&str]) {
        for word in words {
            self.words.remove(*word);
        }
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
