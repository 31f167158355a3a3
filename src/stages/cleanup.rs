//! Character-level cleanup stages.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS_THEN_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)([a-zA-Z]+)").expect("valid regex"));

static PUNCTUATION_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[,:?!"()'.%\[\]]+"#).expect("valid regex"));

/// Collapse runs of the same character longer than two down to exactly two.
///
/// Scans left to right over the whole string, not token-bounded, operating on
/// `char` units (combining sequences are not specially handled). Idempotent.
///
/// `"I am verrry happpyyy today"` → `"I am verry happyy today"`
pub fn collapse_repeated_characters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last: Option<char> = None;
    let mut run = 0usize;
    for ch in text.chars() {
        if last == Some(ch) {
            run += 1;
        } else {
            last = Some(ch);
            run = 1;
        }
        if run <= 2 {
            out.push(ch);
        }
    }
    out
}

/// Insert a space where a digit run is immediately followed by a letter run.
///
/// Leftmost, non-overlapping. Letter-then-digit boundaries (`"adults2"`) are
/// left alone; the asymmetry is a policy choice, not an oversight.
///
/// `"tickets for 2adults"` → `"tickets for 2 adults"`
pub fn separate_digits_from_letters(text: &str) -> String {
    DIGITS_THEN_LETTERS.replace_all(text, "$1 $2").into_owned()
}

/// Replace punctuation from the fixed set `, : ? ! " ( ) ' . % [ ]` with a
/// single space per run, then delete hyphens outright.
///
/// The hyphen is deleted zero-width rather than space-replaced so that
/// hyphenated compounds fuse ("e-mail" → "email"); everything else in the
/// set widens to a space. Punctuation outside the set is untouched.
pub fn strip_punctuation(text: &str) -> String {
    let spaced = PUNCTUATION_RUN.replace_all(text, " ");
    spaced.replace('-', "")
}

/// Trim, then collapse every internal whitespace run to one ASCII space.
/// Idempotent.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace every decimal digit with `mask`, digit by digit.
///
/// `"on 22 april"` with mask `'d'` → `"on dd april"`. The output always has
/// the same number of chars as the input.
pub fn mask_digits(text: &str, mask: char) -> String {
    text.chars()
        .map(|c| if c.is_ascii_digit() { mask } else { c })
        .collect()
}
