//! Error types

use thiserror::Error;

use crate::pipeline::validation::ValidationReport;

/// Failure reported by a [`TextAnalyzer`](crate::nlp::analyzer::TextAnalyzer).
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The analyzer rejected its input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Any failure from an analyzer backend (model, service, ...)
    #[error(transparent)]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors returned by summarization
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Every token was a stop-word or punctuation
    #[error("no scorable content: input has no words besides stop-words and punctuation")]
    NoScorableContent,

    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("text analysis failed: {0}")]
    Analyzer(#[from] AnalyzerError),

    #[error("invalid summarizer spec: {0}")]
    InvalidConfig(ValidationReport),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
