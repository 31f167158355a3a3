//! Lexical substitution stages: word-form expansion and emoticon extraction.

use crate::tables::emoticons::{EmoticonTable, EmotionLabel};
use crate::tables::expansion::ExpansionTable;

/// Expand word forms through a lookup table.
///
/// Splits on whitespace; each token is lowercased and looked up, and a hit
/// replaces the whole token with the mapped phrase. Unmatched tokens pass
/// through with their original casing. Tokens are rejoined with single
/// spaces, so original inter-token whitespace width is not preserved.
///
/// Backs both the apposition stage ("don't" → "do not") and the slang stage
/// ("thanq" → "thank you").
pub fn expand_word_forms(text: &str, table: &ExpansionTable) -> String {
    let expanded: Vec<&str> = text
        .split_whitespace()
        .map(|word| table.lookup(word).unwrap_or(word))
        .collect();
    expanded.join(" ")
}

/// Extract emoticons from text.
///
/// Splits on whitespace and exact-matches each token against the table. A
/// match appends the mapped label (one per token occurrence, scan order) and
/// replaces every occurrence of that token substring in the text with a
/// single space. The whole-string replacement can strip the same glyph where
/// it appears embedded in another token; this mirrors the historical
/// behavior and is part of the contract.
///
/// The residual text is not whitespace-normalized; run
/// [`normalize_whitespace`](crate::stages::cleanup::normalize_whitespace)
/// afterwards.
pub fn extract_emoticons(text: &str, table: &EmoticonTable) -> (String, Vec<EmotionLabel>) {
    let mut labels = Vec::new();
    let mut out = text.to_string();
    for word in text.split_whitespace() {
        if let Some(label) = table.lookup(word) {
            labels.push(label);
            out = out.replace(word, " ");
        }
    }
    (out, labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apposition_expansion() {
        let table = ExpansionTable::appositions();
        assert_eq!(
            expand_word_forms("I don't know what is going on?", &table),
            "I do not know what is going on?"
        );
    }

    #[test]
    fn test_slang_expansion() {
        let table = ExpansionTable::slang();
        assert_eq!(
            expand_word_forms("hi, thanq so mch", &table),
            "hi, thank you so much"
        );
    }

    #[test]
    fn test_unmatched_tokens_keep_case() {
        let table = ExpansionTable::appositions();
        assert_eq!(expand_word_forms("Hello WORLD", &table), "Hello WORLD");
    }

    #[test]
    fn test_expansion_collapses_whitespace() {
        let table = ExpansionTable::new();
        assert_eq!(expand_word_forms("a   b\tc", &table), "a b c");
    }

    #[test]
    fn test_expansion_of_empty_input() {
        let table = ExpansionTable::appositions();
        assert_eq!(expand_word_forms("", &table), "");
        assert_eq!(expand_word_forms("   ", &table), "");
    }

    #[test]
    fn test_emoticon_extraction() {
        let table = EmoticonTable::builtin();
        let (text, labels) = extract_emoticons("Sure, you are welcome :)", &table);
        assert_eq!(text, "Sure, you are welcome  ");
        assert_eq!(labels, vec![EmotionLabel::Happy]);
    }

    #[test]
    fn test_emoticon_duplicates_keep_one_label_per_occurrence() {
        let table = EmoticonTable::builtin();
        let (text, labels) = extract_emoticons(":) fine :)", &table);
        // Both token occurrences yield a label; the first replacement already
        // removed every copy of the glyph from the text.
        assert_eq!(labels, vec![EmotionLabel::Happy, EmotionLabel::Happy]);
        assert!(!text.contains(":)"));
    }

    #[test]
    fn test_emoticon_global_replacement_quirk() {
        let table = EmoticonTable::builtin();
        // The matched token ":(" is also a substring of the embedded "ab:(cd"
        // token, and whole-string replacement strips it there too.
        let (text, labels) = extract_emoticons(":( ab:(cd", &table);
        assert_eq!(labels, vec![EmotionLabel::Sad]);
        assert_eq!(text, "  ab cd");
    }

    #[test]
    fn test_emoticon_miss_is_noop() {
        let table = EmoticonTable::builtin();
        let (text, labels) = extract_emoticons("no glyphs here", &table);
        assert_eq!(text, "no glyphs here");
        assert!(labels.is_empty());
    }

    #[test]
    fn test_emoticon_empty_input() {
        let table = EmoticonTable::builtin();
        let (text, labels) = extract_emoticons("", &table);
        assert_eq!(text, "");
        assert!(labels.is_empty());
    }
}
