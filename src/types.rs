//! Core data types
//!
//! Tokens, sentences and the analyzed document they belong to, plus the
//! summarizer configuration.

use serde::{Deserialize, Serialize};

/// A token produced by a text analyzer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text as it appears in the input
    pub text: String,
    /// Lowercased surface text
    pub norm: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Index of the containing sentence
    pub sentence_idx: usize,
    /// Position in the document's token stream
    pub token_idx: usize,
    /// Whether the analyzer classified this token as a stop-word
    pub is_stopword: bool,
    /// Whether the analyzer classified this token as punctuation
    pub is_punct: bool,
}

impl Token {
    /// Create a new token; the normalized form is derived from `text`.
    pub fn new(
        text: &str,
        start: usize,
        end: usize,
        sentence_idx: usize,
        token_idx: usize,
    ) -> Self {
        Self {
            text: text.to_string(),
            norm: text.to_lowercase(),
            start,
            end,
            sentence_idx,
            token_idx,
            is_stopword: false,
            is_punct: false,
        }
    }

    /// Set the stop-word flag
    pub fn with_stopword(mut self, is_stopword: bool) -> Self {
        self.is_stopword = is_stopword;
        self
    }

    /// Set the punctuation flag
    pub fn with_punct(mut self, is_punct: bool) -> Self {
        self.is_punct = is_punct;
        self
    }

    /// A keyword is any token that is neither a stop-word nor punctuation.
    #[inline]
    pub fn is_keyword(&self) -> bool {
        !self.is_stopword && !self.is_punct
    }
}

/// A sentence span within an analyzed document
///
/// `index` is the sentence's identity: two sentences with identical text are
/// still distinct entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Surface text (exact slice of the input)
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Position in document order
    pub index: usize,
    /// First token index (inclusive)
    pub start_token: usize,
    /// Last token index (exclusive)
    pub end_token: usize,
}

impl Sentence {
    /// Number of tokens in the sentence
    pub fn len(&self) -> usize {
        self.end_token.saturating_sub(self.start_token)
    }

    /// Whether the sentence holds no tokens
    pub fn is_empty(&self) -> bool {
        self.end_token == self.start_token
    }
}

/// Output of a text analyzer: the token stream and its sentence segmentation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub tokens: Vec<Token>,
    pub sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(tokens: Vec<Token>, sentences: Vec<Sentence>) -> Self {
        Self { tokens, sentences }
    }

    /// Tokens belonging to `sentence`.
    ///
    /// Spans reaching past the token stream are clamped.
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        let end = sentence.end_token.min(self.tokens.len());
        let start = sentence.start_token.min(end);
        &self.tokens[start..end]
    }

    /// Iterate over keyword tokens (neither stop-word nor punctuation)
    pub fn keywords(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_keyword())
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Which tokens of a sentence are probed against the frequency table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Probe every token of the sentence, stop-words and punctuation included
    #[default]
    AllTokens,
    /// Probe keyword tokens only; produces the same scores
    KeywordsOnly,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllTokens => "all_tokens",
            Self::KeywordsOnly => "keywords_only",
        }
    }
}

/// Summarizer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizerConfig {
    /// Maximum number of sentences in the summary
    pub num_sentences: usize,
    /// Sentence scoring mode
    pub scoring: ScoringMode,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            num_sentences: crate::DEFAULT_MAX_SENTENCES,
            scoring: ScoringMode::AllTokens,
        }
    }
}

impl SummarizerConfig {
    /// Set the maximum number of sentences
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Set the scoring mode
    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }
}
