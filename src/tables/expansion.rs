//! Word-form expansion tables.
//!
//! An [`ExpansionTable`] maps a lowercase word form to its canonical
//! expansion, which may contain several words. The same type backs both the
//! apposition (contraction) table and the slang table; only the data differs.

use rustc_hash::FxHashMap;

/// Immutable mapping from a lowercase word form to its expansion.
///
/// Keys are lowercased at construction; lookups lowercase the probe token, so
/// `"Don't"` and `"don't"` hit the same entry.
#[derive(Debug, Clone, Default)]
pub struct ExpansionTable {
    entries: FxHashMap<String, String>,
}

impl ExpansionTable {
    /// Create an empty table (every lookup misses).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(form, expansion)` pairs. Keys are lowercased.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(from, to)| (from.to_lowercase(), to.to_string()))
            .collect();
        Self { entries }
    }

    /// Add a single entry. The key is lowercased.
    pub fn insert(&mut self, from: &str, to: &str) {
        self.entries.insert(from.to_lowercase(), to.to_string());
    }

    /// Look up a token, case-insensitively on the key side.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.entries.get(&token.to_lowercase()).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Starter table of English contractions ("don't" → "do not").
    pub fn appositions() -> Self {
        Self::from_pairs(&[
            ("aren't", "are not"),
            ("can't", "cannot"),
            ("couldn't", "could not"),
            ("didn't", "did not"),
            ("doesn't", "does not"),
            ("don't", "do not"),
            ("hadn't", "had not"),
            ("hasn't", "has not"),
            ("haven't", "have not"),
            ("he'd", "he would"),
            ("he'll", "he will"),
            ("he's", "he is"),
            ("i'd", "i would"),
            ("i'll", "i will"),
            ("i'm", "i am"),
            ("i've", "i have"),
            ("isn't", "is not"),
            ("it's", "it is"),
            ("let's", "let us"),
            ("mustn't", "must not"),
            ("shan't", "shall not"),
            ("she'd", "she would"),
            ("she'll", "she will"),
            ("she's", "she is"),
            ("shouldn't", "should not"),
            ("that's", "that is"),
            ("there's", "there is"),
            ("they'd", "they would"),
            ("they'll", "they will"),
            ("they're", "they are"),
            ("they've", "they have"),
            ("wasn't", "was not"),
            ("we'd", "we would"),
            ("we're", "we are"),
            ("we've", "we have"),
            ("weren't", "were not"),
            ("what'll", "what will"),
            ("what're", "what are"),
            ("what's", "what is"),
            ("what've", "what have"),
            ("where's", "where is"),
            ("who'd", "who would"),
            ("who'll", "who will"),
            ("who're", "who are"),
            ("who's", "who is"),
            ("won't", "will not"),
            ("wouldn't", "would not"),
            ("you'd", "you would"),
            ("you'll", "you will"),
            ("you're", "you are"),
            ("you've", "you have"),
        ])
    }

    /// Starter table of social-media slang ("thanq" → "thank you").
    pub fn slang() -> Self {
        Self::from_pairs(&[
            ("asap", "as soon as possible"),
            ("b4", "before"),
            ("brb", "be right back"),
            ("btw", "by the way"),
            ("gr8", "great"),
            ("gud", "good"),
            ("idk", "i do not know"),
            ("imo", "in my opinion"),
            ("lol", "laughing out loud"),
            ("mch", "much"),
            ("omg", "oh my god"),
            ("pls", "please"),
            ("plz", "please"),
            ("tc", "take care"),
            ("thanq", "thank you"),
            ("thx", "thanks"),
            ("ttyl", "talk to you later"),
            ("u", "you"),
            ("ur", "your"),
            ("wru", "where are you"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive_on_keys() {
        let table = ExpansionTable::from_pairs(&[("Don't", "do not")]);
        assert_eq!(table.lookup("don't"), Some("do not"));
        assert_eq!(table.lookup("DON'T"), Some("do not"));
    }

    #[test]
    fn test_lookup_miss() {
        let table = ExpansionTable::appositions();
        assert_eq!(table.lookup("hello"), None);
    }

    #[test]
    fn test_builtin_appositions() {
        let table = ExpansionTable::appositions();
        assert_eq!(table.lookup("don't"), Some("do not"));
        assert_eq!(table.lookup("won't"), Some("will not"));
        assert!(!table.is_empty());
    }

    #[test]
    fn test_builtin_slang() {
        let table = ExpansionTable::slang();
        assert_eq!(table.lookup("thanq"), Some("thank you"));
        assert_eq!(table.lookup("mch"), Some("much"));
    }

    #[test]
    fn test_insert() {
        let mut table = ExpansionTable::new();
        table.insert("Smh", "shaking my head");
        assert_eq!(table.lookup("smh"), Some("shaking my head"));
        assert_eq!(table.len(), 1);
    }
}
