//! Machine-readable pipeline specification errors.
//!
//! Carried inside validation diagnostics; each error names a code, the spec
//! path it applies to, a message, and an optional hint for fixing it.

use serde::Serialize;
use thiserror::Error;

/// Stable error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The resolved stage list is empty.
    EmptyPipeline,
    /// A stage appears in an order that corrupts a later stage's input.
    OrderingConstraint,
    /// The named preset is not known.
    UnknownPreset,
    /// The same stage is listed more than once.
    DuplicateStage,
    /// A field the schema does not recognize.
    UnknownField,
}

impl ErrorCode {
    /// Returns the user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyPipeline => "empty_pipeline",
            Self::OrderingConstraint => "ordering_constraint",
            Self::UnknownPreset => "unknown_preset",
            Self::DuplicateStage => "duplicate_stage",
            Self::UnknownField => "unknown_field",
        }
    }
}

/// A single spec problem: code, path, message, optional hint.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{path}: {message}")]
pub struct StageSpecError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl StageSpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
