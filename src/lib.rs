//! Composable normalization pipeline for noisy social-media text.
//!
//! Every transform is a pure, total function from text to text; the
//! word-level stages additionally read immutable lookup tables. Stages can
//! be called individually from [`stages`], or wired into an explicit,
//! validated ordering through [`pipeline`].
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use rapid_textclean::{Cleaner, EmotionLabel, Lexicons};
//!
//! let cleaner = Cleaner::social_media(Arc::new(Lexicons::builtin()));
//! let out = cleaner.run("sooooo happyyy today :) #blessed");
//!
//! assert!(!out.text.contains('#'));
//! assert_eq!(out.emotions, vec![EmotionLabel::Happy]);
//! ```
//!
//! # Ordering matters
//!
//! Stage composition is part of the contract: expansion and emoticon
//! extraction must see apostrophes and glyphs that punctuation removal
//! destroys, and stemming re-tokenizes so it runs last. The
//! [`pipeline::validation`] engine enforces these constraints when a
//! [`Cleaner`] is built from a [`PipelineSpec`], so per-document runs never
//! fail.

pub mod pipeline;
pub mod stages;
pub mod tables;
pub mod types;

pub use pipeline::runner::{Cleaner, Lexicons};
pub use pipeline::spec::{PipelineSpec, StageKind, SOCIAL_MEDIA_STAGES};
pub use pipeline::validation::{ValidationEngine, ValidationReport};
pub use tables::emoticons::{EmoticonTable, EmotionLabel};
pub use tables::expansion::ExpansionTable;
pub use tables::stopwords::StopWordSet;
pub use types::{CleanConfig, CleanOutput, StemmerKind};
