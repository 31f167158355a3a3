//! Algebraic properties of the transform stages.

use proptest::prelude::*;

use rapid_textclean::stages::{
    collapse_repeated_characters, expand_word_forms, mask_digits, normalize_whitespace,
    remove_single_char_words, remove_stop_words, remove_urls, remove_words_with_digits,
    separate_digits_from_letters, strip_punctuation,
};
use rapid_textclean::{ExpansionTable, StopWordSet};

proptest! {
    #[test]
    fn collapse_repeated_is_idempotent(s in ".*") {
        let once = collapse_repeated_characters(&s);
        prop_assert_eq!(collapse_repeated_characters(&once), once);
    }

    #[test]
    fn collapse_never_leaves_runs_longer_than_two(s in ".*") {
        let out = collapse_repeated_characters(&s);
        let chars: Vec<char> = out.chars().collect();
        for window in chars.windows(3) {
            prop_assert!(!(window[0] == window[1] && window[1] == window[2]));
        }
    }

    #[test]
    fn normalize_whitespace_is_idempotent(s in ".*") {
        let once = normalize_whitespace(&s);
        prop_assert_eq!(normalize_whitespace(&once), once);
    }

    #[test]
    fn mask_digits_preserves_char_length(s in ".*") {
        let masked = mask_digits(&s, 'd');
        prop_assert_eq!(masked.chars().count(), s.chars().count());
    }

    #[test]
    fn mask_digits_leaves_no_digits(s in ".*") {
        let masked = mask_digits(&s, 'd');
        prop_assert!(!masked.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn expansion_with_empty_table_is_whitespace_normalization(s in ".*") {
        let table = ExpansionTable::new();
        prop_assert_eq!(expand_word_forms(&s, &table), normalize_whitespace(&s));
    }

    #[test]
    fn digit_filter_output_has_no_digit_tokens(s in ".*") {
        let out = remove_words_with_digits(&s);
        for token in out.split_whitespace() {
            prop_assert!(!token.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn short_word_filter_keeps_only_longer_tokens(s in ".*") {
        let out = remove_single_char_words(&s);
        for token in out.split_whitespace() {
            prop_assert!(token.chars().count() > 1);
        }
    }

    // Totality: every stage accepts arbitrary input without panicking.
    #[test]
    fn stages_are_total(s in "\\PC*") {
        let _ = collapse_repeated_characters(&s);
        let _ = separate_digits_from_letters(&s);
        let _ = strip_punctuation(&s);
        let _ = normalize_whitespace(&s);
        let _ = mask_digits(&s, 'd');
        let _ = remove_urls(&s);
        let _ = remove_words_with_digits(&s);
        let _ = remove_single_char_words(&s);
        let _ = remove_stop_words(&s, &StopWordSet::empty());
    }
}

#[test]
fn stages_accept_empty_input() {
    assert_eq!(collapse_repeated_characters(""), "");
    assert_eq!(separate_digits_from_letters(""), "");
    assert_eq!(strip_punctuation(""), "");
    assert_eq!(normalize_whitespace(""), "");
    assert_eq!(mask_digits("", 'd'), "");
    assert_eq!(remove_urls(""), "");
    assert_eq!(remove_words_with_digits(""), "");
    assert_eq!(remove_single_char_words(""), "");
    assert_eq!(remove_stop_words("", &StopWordSet::empty()), "");
}
