//! Summarizer specification types.
//!
//! A [`SummarizerSpec`] is a versioned JSON document describing how to build
//! a summarizer: stop-word language and overrides, summary length, scoring
//! mode and runtime limits. Specs are checked by the
//! [`super::validation::ValidationEngine`] before anything is built.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "language": "en",
//!   "max_sentences": 3,
//!   "scoring": "all_tokens",
//!   "stopwords": { "add": ["lot"], "remove": [] },
//!   "runtime": { "max_tokens": 200000 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::validation::{ValidationEngine, ValidationReport};
use crate::errors::{Result, SummarizeError};
use crate::nlp::analyzer::RuleBasedAnalyzer;
use crate::nlp::stopwords::{Language, StopwordFilter};
use crate::summarizer::Summarizer;
use crate::types::{ScoringMode, SummarizerConfig};

/// Current spec version
pub const SPEC_VERSION: u32 = 1;

/// Top-level summarizer specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Stop-word language code or name (default `"en"`).
    #[serde(default)]
    pub language: Option<String>,

    /// Maximum number of summary sentences (default 3). Signed so that
    /// non-positive values reach validation instead of failing to parse.
    #[serde(default)]
    pub max_sentences: Option<i64>,

    #[serde(default)]
    pub scoring: Option<ScoringMode>,

    #[serde(default)]
    pub stopwords: StopwordSpec,

    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Adjustments to the language's stop-word list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordSpec {
    #[serde(default)]
    pub add: Vec<String>,

    #[serde(default)]
    pub remove: Vec<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Runtime execution limits (fail-fast guards).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Maximum number of input tokens before rejecting.
    #[serde(default)]
    pub max_tokens: Option<usize>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SummarizerSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            language: None,
            max_sentences: None,
            scoring: None,
            stopwords: StopwordSpec::default(),
            runtime: RuntimeSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl SummarizerSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Run the default validation rules.
    pub fn validate(&self) -> ValidationReport {
        ValidationEngine::with_defaults().validate(self)
    }

    pub fn language(&self) -> Language {
        self.language
            .as_deref()
            .map(Language::resolve)
            .unwrap_or(Language::English)
    }

    /// Validate, then build the summarizer config and analyzer.
    ///
    /// Warnings do not block the build; any error yields
    /// [`SummarizeError::InvalidConfig`] with the full report.
    pub fn build(&self) -> Result<(SummarizerConfig, RuleBasedAnalyzer)> {
        let report = self.validate();
        if report.has_errors() {
            return Err(SummarizeError::InvalidConfig(report));
        }

        let defaults = SummarizerConfig::default();
        let num_sentences = match self.max_sentences {
            Some(n) => usize::try_from(n).map_err(|_| SummarizeError::InvalidArgument {
                name: "max_sentences",
                reason: format!("{n} is out of range"),
            })?,
            None => defaults.num_sentences,
        };
        let config = SummarizerConfig {
            num_sentences,
            scoring: self.scoring.unwrap_or(defaults.scoring),
        };

        let mut stopwords = StopwordFilter::for_language(self.language());
        stopwords.add_stopwords(self.stopwords.add.as_slice());
        stopwords.remove_stopwords(self.stopwords.remove.as_slice());

        let analyzer = RuleBasedAnalyzer::for_language(self.language())
            .with_stopwords(stopwords)
            .with_max_tokens(self.runtime.max_tokens);

        Ok((config, analyzer))
    }

    /// Build a ready-to-use summarizer.
    pub fn into_summarizer(&self) -> Result<Summarizer<RuleBasedAnalyzer>> {
        let (config, analyzer) = self.build()?;
        Ok(Summarizer::with_config(analyzer, config))
    }
}
