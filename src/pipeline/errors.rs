//! Structured spec errors.
//!
//! Each [`SpecError`] carries a stable [`ErrorCode`], a JSON-pointer `path`
//! to the offending field, a human-readable message and an optional hint.

use std::fmt;

use serde::Serialize;

/// Stable machine-readable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnsupportedVersion,
    InvalidValue,
    UnknownLanguage,
    ConflictingStopwords,
    LimitExceeded,
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidValue => "invalid_value",
            Self::UnknownLanguage => "unknown_language",
            Self::ConflictingStopwords => "conflicting_stopwords",
            Self::LimitExceeded => "limit_exceeded",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found in a summarizer spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
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

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

impl std::error::Error for SpecError {}
