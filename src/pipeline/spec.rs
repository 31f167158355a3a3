//! Pipeline specification types.
//!
//! A [`PipelineSpec`] is an ordered sequence of stage descriptors plus
//! strictness settings — the input to the
//! [`ValidationEngine`](super::validation::ValidationEngine) and to
//! [`Cleaner::from_spec`](super::runner::Cleaner::from_spec).
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "preset": "social_media",
//!   "stages": ["appositions", "emoticons", "punctuation", "whitespace"],
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One pipeline stage, named by what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Apposition (contraction) expansion.
    Appositions,
    /// Slang expansion.
    Slang,
    /// Emoticon extraction.
    Emoticons,
    /// Two-phase URL removal.
    Urls,
    /// Prefix-tagged word removal ("#", "@").
    Tags,
    /// Repeated-character collapsing.
    CollapseRepeats,
    /// Digit-then-letter separation.
    SeparateDigits,
    /// Punctuation removal.
    Punctuation,
    /// Extra-whitespace collapsing.
    Whitespace,
    /// Per-digit masking.
    MaskDigits,
    /// Removal of tokens containing digits.
    AlphanumericWords,
    /// Single-character word removal.
    ShortWords,
    /// Stop-word filtering.
    StopWords,
    /// Root-form reduction.
    Stem,
}

impl StageKind {
    /// Returns the user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Appositions => "appositions",
            Self::Slang => "slang",
            Self::Emoticons => "emoticons",
            Self::Urls => "urls",
            Self::Tags => "tags",
            Self::CollapseRepeats => "collapse_repeats",
            Self::SeparateDigits => "separate_digits",
            Self::Punctuation => "punctuation",
            Self::Whitespace => "whitespace",
            Self::MaskDigits => "mask_digits",
            Self::AlphanumericWords => "alphanumeric_words",
            Self::ShortWords => "short_words",
            Self::StopWords => "stop_words",
            Self::Stem => "stem",
        }
    }
}

/// The documented default ordering for social-media text.
///
/// Lexical substitution runs first (it needs apostrophes and intact glyphs),
/// then URL/tag stripping, then character cleanup, then the token filters
/// over normalized whitespace.
pub const SOCIAL_MEDIA_STAGES: &[StageKind] = &[
    StageKind::Appositions,
    StageKind::Slang,
    StageKind::Emoticons,
    StageKind::Urls,
    StageKind::Tags,
    StageKind::CollapseRepeats,
    StageKind::SeparateDigits,
    StageKind::Punctuation,
    StageKind::Whitespace,
    StageKind::AlphanumericWords,
    StageKind::ShortWords,
    StageKind::StopWords,
];

/// Top-level pipeline specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Optional preset name used when `stages` is empty (e.g. `"social_media"`).
    #[serde(default)]
    pub preset: Option<String>,

    /// Explicit stage ordering. When empty, the preset supplies it.
    #[serde(default)]
    pub stages: Vec<StageKind>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl PipelineSpec {
    /// Spec for the default social-media preset.
    pub fn social_media() -> Self {
        Self {
            v: 1,
            preset: Some("social_media".to_string()),
            stages: Vec::new(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }

    /// Spec with an explicit stage ordering and no preset.
    pub fn with_stages(stages: &[StageKind]) -> Self {
        Self {
            v: 1,
            preset: None,
            stages: stages.to_vec(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }

    /// The effective stage ordering: explicit stages win, otherwise a known
    /// preset supplies them. An unknown preset resolves to no stages (the
    /// validation engine reports it).
    pub fn resolved_stages(&self) -> Vec<StageKind> {
        if !self.stages.is_empty() {
            return self.stages.clone();
        }
        match self.preset.as_deref() {
            Some("social_media") => SOCIAL_MEDIA_STAGES.to_vec(),
            _ => Vec::new(),
        }
    }
}
