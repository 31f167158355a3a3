//! Root-form reduction.
//!
//! The only stage with external algorithmic dependencies: a tokenizer
//! capability splits the text into linguistic tokens, and one of two named
//! stemming strategies reduces each token. The stage's own responsibility is
//! the composition contract — bracketed content is stripped before
//! tokenization, and the strategy is fixed at construction time.

use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

use crate::stages::strip::remove_bracketed;
use crate::tables::stopwords::StopWordSet;
use crate::types::StemmerKind;

/// Tokenizer capability: text in, ordered token strings out.
///
/// Any Unicode-aware tokenizer satisfying this signature is acceptable; the
/// default is [`UnicodeTokenizer`].
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Default tokenizer: UAX-29 word boundaries via `unicode-segmentation`.
///
/// Punctuation-only runs are not words and drop out; mid-word apostrophes
/// ("don't") stay attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}

/// Reduces words to an approximate root form.
///
/// Holds the selected strategy, its stemmer, and (for the Snowball strategy)
/// the ignore set of words that pass through unstemmed.
pub struct RootFormReducer {
    kind: StemmerKind,
    stemmer: Stemmer,
    ignore: StopWordSet,
    tokenizer: Box<dyn Tokenizer>,
}

impl fmt::Debug for RootFormReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootFormReducer")
            .field("kind", &self.kind)
            .field("ignore_len", &self.ignore.len())
            .finish_non_exhaustive()
    }
}

impl RootFormReducer {
    /// Build a reducer for the given strategy.
    ///
    /// `Snowball` picks the language's algorithm and ignores that language's
    /// stop words; `Porter` always stems English and ignores nothing.
    pub fn new(kind: StemmerKind, language: &str) -> Self {
        let (stemmer, ignore) = match kind {
            StemmerKind::Snowball => (
                Stemmer::create(algorithm_for(language)),
                StopWordSet::for_language(language),
            ),
            StemmerKind::Porter => (Stemmer::create(Algorithm::English), StopWordSet::empty()),
        };
        Self {
            kind,
            stemmer,
            ignore,
            tokenizer: Box::new(UnicodeTokenizer),
        }
    }

    /// Swap in a custom tokenizer capability.
    pub fn with_tokenizer<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Override the ignore set used by the Snowball strategy.
    pub fn with_ignored_words(mut self, ignore: StopWordSet) -> Self {
        self.ignore = ignore;
        self
    }

    /// The strategy this reducer was built with.
    pub fn kind(&self) -> StemmerKind {
        self.kind
    }

    /// Reduce every token of `text` to its root form.
    ///
    /// Strips bracketed content first, then tokenizes, stems each token, and
    /// rejoins with single spaces.
    ///
    /// `"I am playing in ground"` → `"I am play in ground"` (Snowball, "en")
    pub fn reduce(&self, text: &str) -> String {
        let unbracketed = remove_bracketed(text);
        let stemmed: Vec<String> = self
            .tokenizer
            .tokenize(&unbracketed)
            .iter()
            .map(|token| self.stem_token(token))
            .collect();
        stemmed.join(" ")
    }

    fn stem_token(&self, token: &str) -> String {
        if self.kind == StemmerKind::Snowball && self.ignore.contains(token) {
            return token.to_string();
        }
        self.stemmer.stem(token).to_string()
    }
}

fn algorithm_for(language: &str) -> Algorithm {
    match language.to_lowercase().as_str() {
        "en" | "english" => Algorithm::English,
        "da" | "danish" => Algorithm::Danish,
        "nl" | "dutch" => Algorithm::Dutch,
        "fi" | "finnish" => Algorithm::Finnish,
        "fr" | "french" => Algorithm::French,
        "de" | "german" => Algorithm::German,
        "hu" | "hungarian" => Algorithm::Hungarian,
        "it" | "italian" => Algorithm::Italian,
        "no" | "norwegian" => Algorithm::Norwegian,
        "pt" | "portuguese" => Algorithm::Portuguese,
        "ro" | "romanian" => Algorithm::Romanian,
        "ru" | "russian" => Algorithm::Russian,
        "es" | "spanish" => Algorithm::Spanish,
        "sv" | "swedish" => Algorithm::Swedish,
        "tr" | "turkish" => Algorithm::Turkish,
        _ => Algorithm::English,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowball_keeps_stop_words_whole() {
        let reducer = RootFormReducer::new(StemmerKind::Snowball, "en");
        assert_eq!(reducer.reduce("I am playing in ground"), "I am play in ground");
    }

    #[test]
    fn test_porter_stems_everything() {
        let reducer = RootFormReducer::new(StemmerKind::Porter, "en");
        assert_eq!(reducer.reduce("playing grounds"), "play ground");
    }

    #[test]
    fn test_brackets_stripped_before_tokenization() {
        let reducer = RootFormReducer::new(StemmerKind::Snowball, "en");
        assert_eq!(reducer.reduce("playing (noisily) outside"), "play outsid");
    }

    #[test]
    fn test_reduce_empty_input() {
        let reducer = RootFormReducer::new(StemmerKind::Snowball, "en");
        assert_eq!(reducer.reduce(""), "");
        assert_eq!(reducer.reduce("   "), "");
    }

    #[test]
    fn test_custom_tokenizer() {
        struct WhitespaceTokenizer;
        impl Tokenizer for WhitespaceTokenizer {
            fn tokenize(&self, text: &str) -> Vec<String> {
                text.split_whitespace().map(str::to_string).collect()
            }
        }

        let reducer =
            RootFormReducer::new(StemmerKind::Porter, "en").with_tokenizer(WhitespaceTokenizer);
        assert_eq!(reducer.reduce("running!"), "running!");
    }

    #[test]
    fn test_custom_ignore_set() {
        let reducer = RootFormReducer::new(StemmerKind::Snowball, "en")
            .with_ignored_words(StopWordSet::from_words(["playing"]));
        assert_eq!(reducer.reduce("playing grounds"), "playing ground");
    }

    #[test]
    fn test_unicode_tokenizer_drops_punctuation_runs() {
        let tokens = UnicodeTokenizer.tokenize("well, done!");
        assert_eq!(tokens, vec!["well", "done"]);
    }
}
