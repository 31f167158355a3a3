//! URL, tag, and bracketed-content removal.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_SWEEP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http\w*://\w*\.?[\w-]+\.+\w+[/\w]+").expect("valid regex"));

static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^()]*\)|\[[^\[\]]*\]|\{[^{}]*\}").expect("valid regex"));

/// Remove URLs in two phases.
///
/// Phase 1 filters whitespace-delimited tokens with a chained precedence: a
/// token survives if it does not start with `www`, else if it does not start
/// with `http`, else if it does not end with `.html`. Only a token failing
/// all three branches is dropped — the filter is far more permissive than a
/// "looks like a URL" heuristic, and the three-branch precedence is part of
/// the contract. Survivors are rejoined with single spaces.
///
/// Phase 2 sweeps the remaining text for `scheme://host.tld/path`-shaped
/// substrings and deletes the first textual occurrence of each match,
/// catching URLs that token splitting missed.
pub fn remove_urls(text: &str) -> String {
    let mut kept = Vec::new();
    for word in text.split_whitespace() {
        if !word.starts_with("www") {
            kept.push(word);
        } else if !word.starts_with("http") {
            kept.push(word);
        } else if !word.ends_with(".html") {
            kept.push(word);
        }
    }
    let mut urlfree = kept.join(" ");

    let matches: Vec<String> = URL_SWEEP
        .find_iter(&urlfree)
        .map(|m| m.as_str().to_string())
        .collect();
    for matched in matches {
        urlfree = urlfree.replacen(&matched, "", 1);
    }
    urlfree
}

/// Remove words starting with a literal prefix ("#", "@", …).
///
/// Finds every `prefix` + word-character run and deletes the first textual
/// occurrence of each matched substring, then trims.
///
/// `"last ball six #dhoni #six"` with `"#"` → `"last ball six"`
pub fn remove_words_starting_with(text: &str, prefix: &str) -> String {
    let pattern =
        Regex::new(&format!(r"{}\w*", regex::escape(prefix))).expect("valid regex");
    let matches: Vec<String> = pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    let mut out = text.to_string();
    for matched in matches {
        out = out.replacen(&matched, "", 1);
    }
    out.trim().to_string()
}

/// Remove parenthesized, square-bracketed, and curly-bracketed content,
/// brackets included. Each span widens to a single space so neighbors do not
/// fuse. Nested brackets shed one level per pass.
pub fn remove_bracketed(text: &str) -> String {
    BRACKETED.replace_all(text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_urls_regex_sweep() {
        assert_eq!(
            remove_urls("link to latest cricket score. https://xyz.com/a/b"),
            "link to latest cricket score. "
        );
    }

    #[test]
    fn test_remove_urls_embedded_without_boundary() {
        // No whitespace boundary: phase 1 keeps the token, phase 2 deletes
        // the URL-shaped substring inside it.
        let out = remove_urls("seehttp://spam.example.com/buy now");
        assert_eq!(out, "see now");
    }

    #[test]
    fn test_token_filter_precedence_keeps_www_tokens() {
        // A "www" token never also starts with "http", so the second branch
        // keeps it — the token filter drops nothing on its own.
        assert_eq!(remove_urls("visit www.google.com today"), "visit www.google.com today");
    }

    #[test]
    fn test_remove_urls_rejoins_with_single_spaces() {
        assert_eq!(remove_urls("a   b"), "a b");
    }

    #[test]
    fn test_remove_urls_empty() {
        assert_eq!(remove_urls(""), "");
    }

    #[test]
    fn test_remove_hashtags() {
        assert_eq!(
            remove_words_starting_with("dhoni rocks with last ball six #dhoni #six", "#"),
            "dhoni rocks with last ball six"
        );
    }

    #[test]
    fn test_remove_mentions() {
        assert_eq!(
            remove_words_starting_with("@user thanks for the game", "@"),
            "thanks for the game"
        );
    }

    #[test]
    fn test_bare_prefix_is_removed() {
        assert_eq!(remove_words_starting_with("a # b", "#"), "a  b");
    }

    #[test]
    fn test_prefix_miss_is_noop() {
        assert_eq!(remove_words_starting_with("plain text", "#"), "plain text");
    }

    #[test]
    fn test_remove_bracketed() {
        assert_eq!(remove_bracketed("I am (really) happy"), "I am   happy");
        assert_eq!(remove_bracketed("a [b] c {d} e"), "a   c   e");
    }

    #[test]
    fn test_remove_bracketed_empty() {
        assert_eq!(remove_bracketed(""), "");
    }
}
