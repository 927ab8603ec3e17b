//! Text analyzers
//!
//! A [`TextAnalyzer`] turns raw text into a [`Document`]: the token stream
//! with stop-word/punctuation flags and its sentence segmentation. The
//! summarizer depends on nothing else, so any tokenizer or model can be
//! plugged in behind this trait.

use std::sync::Arc;

use crate::errors::AnalyzerError;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::stopwords::{Language, StopwordFilter};
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{Document, Sentence, Token};

/// Tokenizes, classifies and segments text.
///
/// # Contract
///
/// - `tokens` are in document order and `token_idx` equals the position in
///   the stream.
/// - `sentences` are in document order, `index` equals the position in the
///   list, and their `start_token..end_token` spans partition `tokens`.
/// - Each sentence's `text` is a slice of the input.
///
/// Analyzers are built once and shared read-only, hence `Send + Sync`.
pub trait TextAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Document, AnalyzerError>;
}

impl<T: TextAnalyzer + ?Sized> TextAnalyzer for &T {
    fn analyze(&self, text: &str) -> Result<Document, AnalyzerError> {
        (**self).analyze(text)
    }
}

impl<T: TextAnalyzer + ?Sized> TextAnalyzer for Arc<T> {
    fn analyze(&self, text: &str) -> Result<Document, AnalyzerError> {
        (**self).analyze(text)
    }
}

impl<T: TextAnalyzer + ?Sized> TextAnalyzer for Box<T> {
    fn analyze(&self, text: &str) -> Result<Document, AnalyzerError> {
        (**self).analyze(text)
    }
}

/// Built-in analyzer: Unicode word and sentence boundaries plus a stop-word list
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAnalyzer {
    tokenizer: Tokenizer,
    segmenter: SentenceSegmenter,
    stopwords: StopwordFilter,
    max_tokens: Option<usize>,
}

impl RuleBasedAnalyzer {
    /// English analyzer
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer using the stop-word list of `language`
    pub fn for_language(language: Language) -> Self {
        Self {
            stopwords: StopwordFilter::for_language(language),
            ..Self::default()
        }
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_segmenter(mut self, segmenter: SentenceSegmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Reject inputs with more than `limit` tokens.
    pub fn with_max_tokens(mut self, limit: Option<usize>) -> Self {
        self.max_tokens = limit;
        self
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    pub fn stopwords_mut(&mut self) -> &mut StopwordFilter {
        &mut self.stopwords
    }
}

impl TextAnalyzer for RuleBasedAnalyzer {
    fn analyze(&self, text: &str) -> Result<Document, AnalyzerError> {
        let spans = self.tokenizer.tokenize(text);
        if let Some(limit) = self.max_tokens {
            if spans.len() > limit {
                return Err(AnalyzerError::InvalidInput(format!(
                    "input has {} tokens, limit is {limit}",
                    spans.len()
                )));
            }
        }

        let sentence_spans = self.segmenter.segment(text);
        let mut tokens = Vec::with_capacity(spans.len());
        let mut counts = vec![0usize; sentence_spans.len()];
        let mut sent_idx = 0;

        for (token_idx, span) in spans.iter().enumerate() {
            while sent_idx + 1 < sentence_spans.len()
                && span.start >= sentence_spans[sent_idx + 1].start
            {
                sent_idx += 1;
            }
            if let Some(count) = counts.get_mut(sent_idx) {
                *count += 1;
            }
            let is_stopword = !span.is_punct && self.stopwords.is_stopword(span.text);
            tokens.push(
                Token::new(span.text, span.start, span.end, sent_idx, token_idx)
                    .with_punct(span.is_punct)
                    .with_stopword(is_stopword),
            );
        }

        let mut sentences = Vec::with_capacity(sentence_spans.len());
        let mut start_token = 0;
        for (index, (span, count)) in sentence_spans.iter().zip(counts).enumerate() {
            sentences.push(Sentence {
                text: span.text.to_string(),
                start: span.start,
                end: span.end,
                index,
                start_token,
                end_token: start_token + count,
            });
            start_token += count;
        }

        Ok(Document::new(tokens, sentences))
    }
}
