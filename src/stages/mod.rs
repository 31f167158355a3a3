//! The transform stages.
//!
//! Every stage is a total, pure function from text to text (the emoticon
//! stage additionally returns the extracted labels). Stages never fail on
//! well-formed input; a miss is a no-op, and the empty string maps to the
//! empty string. Composition order is the caller's contract — the
//! [`pipeline`](crate::pipeline) module makes it explicit and validated.

pub mod cleanup;
pub mod expand;
pub mod filter;
pub mod stem;
pub mod strip;

pub use cleanup::{
    collapse_repeated_characters, mask_digits, normalize_whitespace,
    separate_digits_from_letters, strip_punctuation,
};
pub use expand::{expand_word_forms, extract_emoticons};
pub use filter::{remove_single_char_words, remove_stop_words, remove_words_with_digits};
pub use stem::{RootFormReducer, Tokenizer, UnicodeTokenizer};
pub use strip::{remove_bracketed, remove_urls, remove_words_starting_with};
