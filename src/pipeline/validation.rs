//! Validation engine for pipeline specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`PipelineSpec`](super::spec::PipelineSpec) and collects every diagnostic
//! into a [`ValidationReport`] — it never short-circuits on the first error,
//! so users see all problems at once.
//!
//! Construction-time validation is what keeps per-document processing total:
//! a [`Cleaner`](super::runner::Cleaner) only exists for specs this engine
//! passed.

use serde::Serialize;

use super::errors::{ErrorCode, StageSpecError};
use super::spec::{PipelineSpec, StageKind};

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding — an error or warning attached to a
/// [`StageSpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: StageSpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: StageSpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: StageSpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &StageSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &StageSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Whether any diagnostic is error-severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

// ─── Rules ──────────────────────────────────────────────────────────────────

/// One validation rule; rules are independent and side-effect free.
pub trait ValidationRule {
    fn check(&self, spec: &PipelineSpec, report: &mut ValidationReport);
}

/// The resolved stage list must not be empty.
struct EmptyPipelineRule;

impl ValidationRule for EmptyPipelineRule {
    fn check(&self, spec: &PipelineSpec, report: &mut ValidationReport) {
        if spec.resolved_stages().is_empty() && known_preset(spec) {
            report.diagnostics.push(ValidationDiagnostic::error(
                StageSpecError::new(ErrorCode::EmptyPipeline, "stages", "no stages to run")
                    .with_hint("list stages explicitly or name a preset"),
            ));
        }
    }
}

/// A named preset must be one the runner knows.
struct KnownPresetRule;

impl ValidationRule for KnownPresetRule {
    fn check(&self, spec: &PipelineSpec, report: &mut ValidationReport) {
        if !known_preset(spec) {
            let name = spec.preset.as_deref().unwrap_or_default();
            report.diagnostics.push(ValidationDiagnostic::error(
                StageSpecError::new(
                    ErrorCode::UnknownPreset,
                    "preset",
                    format!("unknown preset `{name}`"),
                )
                .with_hint("known presets: social_media"),
            ));
        }
    }
}

fn known_preset(spec: &PipelineSpec) -> bool {
    matches!(spec.preset.as_deref(), None | Some("social_media"))
}

/// Cross-stage ordering constraints.
///
/// - Expansion stages read apostrophes, which punctuation removal destroys.
/// - Emoticon glyphs are punctuation; extraction must see them intact.
/// - Root-form reduction re-tokenizes and must run last.
/// - Stop-word filtering splits on single spaces, so it wants collapsed
///   whitespace first (warning only).
struct StageOrderingRule;

impl StageOrderingRule {
    fn position(stages: &[StageKind], kind: StageKind) -> Option<usize> {
        stages.iter().position(|s| *s == kind)
    }
}

impl ValidationRule for StageOrderingRule {
    fn check(&self, spec: &PipelineSpec, report: &mut ValidationReport) {
        let stages = spec.resolved_stages();
        let punctuation = Self::position(&stages, StageKind::Punctuation);

        for lexical in [StageKind::Appositions, StageKind::Slang] {
            if let (Some(lex), Some(punct)) = (Self::position(&stages, lexical), punctuation) {
                if lex > punct {
                    report.diagnostics.push(ValidationDiagnostic::error(
                        StageSpecError::new(
                            ErrorCode::OrderingConstraint,
                            "stages",
                            format!(
                                "`{}` runs after `punctuation`, which strips the apostrophes its keys match on",
                                lexical.as_str()
                            ),
                        )
                        .with_hint("move expansion stages before punctuation removal"),
                    ));
                }
            }
        }

        if let (Some(emo), Some(punct)) =
            (Self::position(&stages, StageKind::Emoticons), punctuation)
        {
            if emo > punct {
                report.diagnostics.push(ValidationDiagnostic::error(
                    StageSpecError::new(
                        ErrorCode::OrderingConstraint,
                        "stages",
                        "`emoticons` runs after `punctuation`, which corrupts the glyphs before extraction",
                    )
                    .with_hint("move emoticon extraction before punctuation removal"),
                ));
            }
        }

        if let Some(stem) = Self::position(&stages, StageKind::Stem) {
            if stem != stages.len() - 1 {
                report.diagnostics.push(ValidationDiagnostic::error(
                    StageSpecError::new(
                        ErrorCode::OrderingConstraint,
                        "stages",
                        "`stem` must be the final stage; it re-tokenizes the text",
                    )
                    .with_hint("move `stem` to the end of the stage list"),
                ));
            }
        }

        if let Some(stop) = Self::position(&stages, StageKind::StopWords) {
            let collapsed_before = Self::position(&stages, StageKind::Whitespace)
                .map(|ws| ws < stop)
                .unwrap_or(false);
            if !collapsed_before {
                report.diagnostics.push(ValidationDiagnostic::warning(
                    StageSpecError::new(
                        ErrorCode::OrderingConstraint,
                        "stages",
                        "`stop_words` splits on single spaces; without a prior `whitespace` stage, \
                         uncollapsed runs weaken the filter",
                    )
                    .with_hint("insert `whitespace` before `stop_words`"),
                ));
            }
        }
    }
}

/// The same stage listed twice is almost always a mistake.
struct DuplicateStageRule;

impl ValidationRule for DuplicateStageRule {
    fn check(&self, spec: &PipelineSpec, report: &mut ValidationReport) {
        let stages = spec.resolved_stages();
        let mut seen = Vec::new();
        for stage in stages {
            if seen.contains(&stage) {
                report.diagnostics.push(ValidationDiagnostic::warning(
                    StageSpecError::new(
                        ErrorCode::DuplicateStage,
                        "stages",
                        format!("stage `{}` is listed more than once", stage.as_str()),
                    ),
                ));
            } else {
                seen.push(stage);
            }
        }
    }
}

/// Unrecognized fields: errors in strict mode, warnings otherwise.
struct UnknownFieldRule;

impl ValidationRule for UnknownFieldRule {
    fn check(&self, spec: &PipelineSpec, report: &mut ValidationReport) {
        for field in spec.unknown_fields.keys() {
            let err = StageSpecError::new(
                ErrorCode::UnknownField,
                field.clone(),
                format!("unrecognized field `{field}`"),
            );
            let diagnostic = if spec.strict {
                ValidationDiagnostic::error(err)
            } else {
                ValidationDiagnostic::warning(err)
            };
            report.diagnostics.push(diagnostic);
        }
    }
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs every registered rule and returns the combined report.
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Engine with the full default rule set.
    pub fn with_defaults() -> Self {
        Self {
            rules: vec![
                Box::new(EmptyPipelineRule),
                Box::new(KnownPresetRule),
                Box::new(StageOrderingRule),
                Box::new(DuplicateStageRule),
                Box::new(UnknownFieldRule),
            ],
        }
    }

    /// Validate a spec against all rules.
    pub fn validate(&self, spec: &PipelineSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            rule.check(spec, &mut report);
        }
        report
    }
}
