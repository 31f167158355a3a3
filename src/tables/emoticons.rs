//! Emoticon lookup table.
//!
//! Maps an exact emoticon glyph (case-sensitive, no normalization) to an
//! [`EmotionLabel`]. Extraction is exact-match only — fuzzy or partial glyph
//! matching is deliberately out of scope.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Sentiment label attached to an emoticon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Laugh,
    Wink,
    Playful,
    Love,
    Surprise,
    Cry,
}

impl EmotionLabel {
    /// Returns the user-facing name used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Laugh => "laugh",
            Self::Wink => "wink",
            Self::Playful => "playful",
            Self::Love => "love",
            Self::Surprise => "surprise",
            Self::Cry => "cry",
        }
    }
}

/// Immutable mapping from an exact emoticon token to its label.
#[derive(Debug, Clone, Default)]
pub struct EmoticonTable {
    entries: FxHashMap<String, EmotionLabel>,
}

impl EmoticonTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(glyph, label)` pairs. Glyphs are kept verbatim.
    pub fn from_pairs(pairs: &[(&str, EmotionLabel)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(glyph, label)| (glyph.to_string(), *label))
            .collect();
        Self { entries }
    }

    /// Add a single entry.
    pub fn insert(&mut self, glyph: &str, label: EmotionLabel) {
        self.entries.insert(glyph.to_string(), label);
    }

    /// Exact-match lookup; no case folding, no normalization.
    pub fn lookup(&self, token: &str) -> Option<EmotionLabel> {
        self.entries.get(token).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Starter table covering the common western-style glyphs.
    pub fn builtin() -> Self {
        Self::from_pairs(&[
            (":)", EmotionLabel::Happy),
            (":-)", EmotionLabel::Happy),
            ("(:", EmotionLabel::Happy),
            ("=)", EmotionLabel::Happy),
            (":(", EmotionLabel::Sad),
            (":-(", EmotionLabel::Sad),
            ("):", EmotionLabel::Sad),
            ("=(", EmotionLabel::Sad),
            (":D", EmotionLabel::Laugh),
            (":-D", EmotionLabel::Laugh),
            ("xD", EmotionLabel::Laugh),
            ("XD", EmotionLabel::Laugh),
            (";)", EmotionLabel::Wink),
            (";-)", EmotionLabel::Wink),
            (":P", EmotionLabel::Playful),
            (":-P", EmotionLabel::Playful),
            (":p", EmotionLabel::Playful),
            ("<3", EmotionLabel::Love),
            (":O", EmotionLabel::Surprise),
            (":-O", EmotionLabel::Surprise),
            (":o", EmotionLabel::Surprise),
            (":'(", EmotionLabel::Cry),
            (":,(", EmotionLabel::Cry),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let table = EmoticonTable::builtin();
        assert_eq!(table.lookup(":)"), Some(EmotionLabel::Happy));
        // Case matters: ":d" is not ":D".
        assert_eq!(table.lookup(":d"), None);
        assert_eq!(table.lookup(":))"), None);
    }

    #[test]
    fn test_custom_table() {
        let table = EmoticonTable::from_pairs(&[("^_^", EmotionLabel::Happy)]);
        assert_eq!(table.lookup("^_^"), Some(EmotionLabel::Happy));
        assert_eq!(table.lookup(":)"), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_label_names() {
        assert_eq!(EmotionLabel::Happy.as_str(), "happy");
        assert_eq!(EmotionLabel::Cry.as_str(), "cry");
    }

    #[test]
    fn test_label_serde() {
        let label: EmotionLabel = serde_json::from_str(r#""playful""#).unwrap();
        assert_eq!(label, EmotionLabel::Playful);
    }
}
