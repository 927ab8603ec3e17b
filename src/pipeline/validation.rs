//! Validation engine for summarizer specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarizerSpec`](super::spec::SummarizerSpec) and collects every
//! diagnostic into a [`ValidationReport`]. It never short-circuits on the
//! first error, so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust
//! use rapid_summarizer::pipeline::spec::SummarizerSpec;
//! use rapid_summarizer::pipeline::validation::ValidationEngine;
//!
//! let spec = SummarizerSpec::from_json(r#"{ "v": 1, "max_sentences": 0 }"#).unwrap();
//! let report = ValidationEngine::with_defaults().validate(&spec);
//! assert!(report.has_errors());
//! for err in report.errors() {
//!     eprintln!("{err}");
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::errors::{ErrorCode, SpecError};
use super::spec::{SummarizerSpec, SPEC_VERSION};
use crate::nlp::stopwords::Language;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding attached to a [`SpecError`].
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
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
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors: Vec<String> = self.errors().map(|e| e.to_string()).collect();
        match errors.len() {
            0 => write!(f, "no errors"),
            1 => f.write_str(&errors[0]),
            n => write!(f, "{n} errors: {}", errors.join("; ")),
        }
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummarizerSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so one engine can be shared
/// across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"max_sentences"`).
    fn name(&self) -> &str;

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SummarizerSpec`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(MaxSentencesRule));
        engine.add_rule(Box::new(LanguageRule));
        engine.add_rule(Box::new(StopwordOverridesRule));
        engine.add_rule(Box::new(RuntimeLimitsRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in execution order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &SummarizerSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Spec version ────────────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. max_sentences must be positive ──────────────────────────────────────

struct MaxSentencesRule;

impl ValidationRule for MaxSentencesRule {
    fn name(&self) -> &str {
        "max_sentences"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        match spec.max_sentences {
            Some(n) if n < 1 => vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidValue,
                    "/max_sentences",
                    format!("max_sentences must be at least 1, got {n}"),
                )
                .with_hint("Remove max_sentences to use the default of 3"),
            )],
            _ => vec![],
        }
    }
}

// ─── 3. Language must be known (fallback is English) ────────────────────────

struct LanguageRule;

impl ValidationRule for LanguageRule {
    fn name(&self) -> &str {
        "language"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        let Some(code) = spec.language.as_deref() else {
            return vec![];
        };
        if code.parse::<Language>().is_ok() {
            return vec![];
        }

        let supported: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        let err = SpecError::new(
            ErrorCode::UnknownLanguage,
            "/language",
            format!("unknown language \"{code}\", falling back to English stop-words"),
        )
        .with_hint(format!("Use one of: {}", supported.join(", ")));

        if spec.strict {
            vec![ValidationDiagnostic::error(err)]
        } else {
            vec![ValidationDiagnostic::warning(err)]
        }
    }
}

// ─── 4. A word cannot be both added and removed ─────────────────────────────

struct StopwordOverridesRule;

impl ValidationRule for StopwordOverridesRule {
    fn name(&self) -> &str {
        "stopword_overrides"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        let added: FxHashSet<String> = spec
            .stopwords
            .add
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        let mut seen = FxHashSet::default();
        spec.stopwords
            .remove
            .iter()
            .map(|w| w.to_lowercase())
            .filter(|w| added.contains(w) && seen.insert(w.clone()))
            .map(|word| {
                ValidationDiagnostic::warning(
                    SpecError::new(
                        ErrorCode::ConflictingStopwords,
                        "/stopwords/remove",
                        format!("\"{word}\" is both added and removed; removal wins"),
                    )
                    .with_hint("List the word in only one of add/remove"),
                )
            })
            .collect()
    }
}

// ─── 5. Runtime limits must be positive when set ────────────────────────────

struct RuntimeLimitsRule;

impl ValidationRule for RuntimeLimitsRule {
    fn name(&self) -> &str {
        "runtime_limits"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        if spec.runtime.max_tokens == Some(0) {
            vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::LimitExceeded,
                    "/runtime/max_tokens",
                    "max_tokens must be greater than 0",
                )
                .with_hint("Remove max_tokens to disable the limit, or set it to a positive value"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 6. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from the extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/stopwords",
            &spec.stopwords.unknown_fields,
            spec.strict,
        ));
        out.extend(Self::check_unknowns(
            "/runtime",
            &spec.runtime.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
