//! Pipeline runner — executes a validated stage list over documents.
//!
//! A [`Cleaner`] holds shared immutable [`Lexicons`], the ordered stage list,
//! and a [`CleanConfig`]. Construction validates the spec (fail fast);
//! [`Cleaner::run`] is total and never fails on a document. Documents are
//! independent, so [`Cleaner::run_batch`] fans out across a rayon pool with
//! no locking.

use std::sync::Arc;

use rayon::prelude::*;

use crate::pipeline::spec::{PipelineSpec, StageKind, SOCIAL_MEDIA_STAGES};
use crate::pipeline::validation::{ValidationEngine, ValidationReport};
use crate::stages::cleanup::{
    collapse_repeated_characters, mask_digits, normalize_whitespace,
    separate_digits_from_letters, strip_punctuation,
};
use crate::stages::expand::{expand_word_forms, extract_emoticons};
use crate::stages::filter::{
    remove_single_char_words, remove_stop_words, remove_words_with_digits,
};
use crate::stages::stem::RootFormReducer;
use crate::stages::strip::{remove_urls, remove_words_starting_with};
use crate::tables::emoticons::{EmoticonTable, EmotionLabel};
use crate::tables::expansion::ExpansionTable;
use crate::tables::stopwords::StopWordSet;
use crate::types::{CleanConfig, CleanOutput};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("clean_stage", stage = $name).entered();
    };
}

/// The shared lookup data every word-level stage reads.
///
/// Built once at startup and passed in behind an `Arc`; hot-swapping means
/// atomically replacing the whole `Arc`, never mutating in place.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    pub appositions: ExpansionTable,
    pub slang: ExpansionTable,
    pub emoticons: EmoticonTable,
    pub stop_words: StopWordSet,
}

impl Lexicons {
    /// The starter tables: built-in contractions, slang, emoticons, and
    /// English stop words.
    pub fn builtin() -> Self {
        Self {
            appositions: ExpansionTable::appositions(),
            slang: ExpansionTable::slang(),
            emoticons: EmoticonTable::builtin(),
            stop_words: StopWordSet::for_language("en"),
        }
    }
}

/// A validated, ready-to-run cleaning pipeline.
#[derive(Debug)]
pub struct Cleaner {
    lexicons: Arc<Lexicons>,
    stages: Vec<StageKind>,
    config: CleanConfig,
    reducer: Option<RootFormReducer>,
}

impl Cleaner {
    /// Build a cleaner from a spec, failing fast on any error-severity
    /// diagnostic. The full report is returned so callers can surface every
    /// problem at once.
    pub fn from_spec(
        spec: &PipelineSpec,
        lexicons: Arc<Lexicons>,
        config: CleanConfig,
    ) -> Result<Self, ValidationReport> {
        let report = ValidationEngine::with_defaults().validate(spec);
        if report.has_errors() {
            return Err(report);
        }
        let stages = spec.resolved_stages();
        let reducer = stages
            .contains(&StageKind::Stem)
            .then(|| RootFormReducer::new(config.stemmer, &config.language));
        Ok(Self {
            lexicons,
            stages,
            config,
            reducer,
        })
    }

    /// The default pipeline for social-media text, with default config.
    ///
    /// Equivalent to [`PipelineSpec::social_media`], which always validates.
    pub fn social_media(lexicons: Arc<Lexicons>) -> Self {
        Self {
            lexicons,
            stages: SOCIAL_MEDIA_STAGES.to_vec(),
            config: CleanConfig::default(),
            reducer: None,
        }
    }

    /// Replace the config, rebuilding the stemmer if the pipeline stems.
    pub fn with_config(mut self, config: CleanConfig) -> Self {
        self.reducer = self
            .stages
            .contains(&StageKind::Stem)
            .then(|| RootFormReducer::new(config.stemmer, &config.language));
        self.config = config;
        self
    }

    /// The ordered stage list this cleaner runs.
    pub fn stages(&self) -> &[StageKind] {
        &self.stages
    }

    /// Run the pipeline over one document.
    pub fn run(&self, text: &str) -> CleanOutput {
        let mut text = text.to_string();
        let mut emotions = Vec::new();
        for stage in &self.stages {
            trace_stage!(stage.as_str());
            text = self.apply(*stage, text, &mut emotions);
        }
        CleanOutput { text, emotions }
    }

    /// Run the pipeline over many documents in parallel.
    ///
    /// Stages are pure and the lexicons immutable, so documents parallelize
    /// freely; output order matches input order.
    pub fn run_batch(&self, docs: &[&str]) -> Vec<CleanOutput> {
        docs.par_iter().map(|doc| self.run(doc)).collect()
    }

    fn apply(
        &self,
        stage: StageKind,
        text: String,
        emotions: &mut Vec<EmotionLabel>,
    ) -> String {
        match stage {
            StageKind::Appositions => expand_word_forms(&text, &self.lexicons.appositions),
            StageKind::Slang => expand_word_forms(&text, &self.lexicons.slang),
            StageKind::Emoticons => {
                let (residual, labels) = extract_emoticons(&text, &self.lexicons.emoticons);
                emotions.extend(labels);
                residual
            }
            StageKind::Urls => remove_urls(&text),
            StageKind::Tags => {
                let mut tagless = text;
                for prefix in &self.config.tag_prefixes {
                    tagless = remove_words_starting_with(&tagless, prefix);
                }
                tagless
            }
            StageKind::CollapseRepeats => collapse_repeated_characters(&text),
            StageKind::SeparateDigits => separate_digits_from_letters(&text),
            StageKind::Punctuation => strip_punctuation(&text),
            StageKind::Whitespace => normalize_whitespace(&text),
            StageKind::MaskDigits => mask_digits(&text, self.config.mask_char),
            StageKind::AlphanumericWords => remove_words_with_digits(&text),
            StageKind::ShortWords => remove_single_char_words(&text),
            StageKind::StopWords => remove_stop_words(&text, &self.lexicons.stop_words),
            // A validated spec always pairs `stem` with a reducer; the fallback
            // is the stage's no-op identity.
            StageKind::Stem => match &self.reducer {
                Some(reducer) => reducer.reduce(&text),
                None => text,
            },
        }
    }
}
