//! Token-level filter stages.

use crate::tables::stopwords::StopWordSet;

/// Remove every whitespace-delimited token containing a decimal digit.
///
/// The whole token goes, not just the digit portion: `"word123"` and
/// `"123word"` are both dropped. Digit-free tokens pass through verbatim.
pub fn remove_words_with_digits(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| !word.chars().any(|c| c.is_ascii_digit()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove every whitespace-delimited token of exactly one character.
///
/// Runs late in a pipeline by convention, since earlier stages can produce
/// fresh one-character tokens.
pub fn remove_single_char_words(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| word.chars().count() > 1)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove tokens exactly present in the stop-word set.
///
/// Splits on literal single spaces (not general whitespace) and matches
/// without any case folding — callers control casing by pre-normalizing both
/// the text and the set consistently.
pub fn remove_stop_words(text: &str, stop_words: &StopWordSet) -> String {
    text.split(' ')
        .filter(|word| !stop_words.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_words_with_digits() {
        assert_eq!(remove_words_with_digits("hello man whatsup123"), "hello man");
        assert_eq!(remove_words_with_digits("123word word123 word"), "word");
    }

    #[test]
    fn test_digit_free_tokens_kept_verbatim() {
        assert_eq!(remove_words_with_digits("MiXeD CaSe"), "MiXeD CaSe");
    }

    #[test]
    fn test_remove_single_char_words() {
        assert_eq!(
            remove_single_char_words("I am in a home for 2 years"),
            "am in home for years"
        );
    }

    #[test]
    fn test_single_char_counts_chars_not_bytes() {
        // 'é' is two bytes but one char, so it is dropped.
        assert_eq!(remove_single_char_words("é ab"), "ab");
    }

    #[test]
    fn test_remove_stop_words() {
        let set = StopWordSet::from_words(["am", "for", "is"]);
        assert_eq!(
            remove_stop_words("I am very excited for the match", &set),
            "I very excited the match"
        );
    }

    #[test]
    fn test_stop_word_match_is_case_sensitive() {
        let set = StopWordSet::from_words(["the"]);
        assert_eq!(remove_stop_words("The the THE", &set), "The THE");
    }

    #[test]
    fn test_stop_words_split_on_single_space_only() {
        let set = StopWordSet::from_words(["b"]);
        // The double space yields an empty token which is kept, so one gap
        // survives the rejoin.
        assert_eq!(remove_stop_words("a  b c", &set), "a  c");
    }

    #[test]
    fn test_filters_on_empty_input() {
        let set = StopWordSet::empty();
        assert_eq!(remove_words_with_digits(""), "");
        assert_eq!(remove_single_char_words(""), "");
        assert_eq!(remove_stop_words("", &set), "");
    }
}
