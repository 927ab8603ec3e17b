//! # rapid-summarizer
//!
//! Frequency-ranked extractive summarization.
//!
//! A summary is built from the input's own sentences:
//!
//! 1. A [`TextAnalyzer`] tokenizes the text, flags stop-words and
//!    punctuation, and splits it into sentences.
//! 2. Keywords (tokens that are neither) are counted and normalized so the
//!    most frequent keyword weighs 1.0.
//! 3. Each sentence scores the sum of its words' weights.
//! 4. The best-scoring sentences, highest first and ties in document order,
//!    are joined with a space.
//!
//! ```
//! use rapid_summarizer::{summarize, RuleBasedAnalyzer, StopwordFilter};
//!
//! let analyzer = RuleBasedAnalyzer::new().with_stopwords(StopwordFilter::from_list(&["a"]));
//! let summary = summarize("Cats sleep. Cats sleep a lot. Dogs bark.", &analyzer, 1).unwrap();
//! assert_eq!(summary, "Cats sleep a lot.");
//! ```

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use errors::{AnalyzerError, Result, SummarizeError};
pub use nlp::analyzer::{RuleBasedAnalyzer, TextAnalyzer};
pub use nlp::stopwords::{Language, StopwordFilter};
pub use pipeline::observer::{NoopObserver, StageTimingObserver, SummaryObserver};
pub use pipeline::spec::SummarizerSpec;
pub use summarizer::{SelectedSentence, Summarizer, Summary};
pub use types::{Document, ScoringMode, Sentence, SummarizerConfig, Token};

/// Default number of summary sentences
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Summarize `text` into at most `max_sentences` of its own sentences.
///
/// Blank input returns an empty string without calling `analyzer`.
///
/// # Errors
///
/// - [`SummarizeError::InvalidArgument`] if `max_sentences` is 0
/// - [`SummarizeError::NoScorableContent`] if the text holds nothing but
///   stop-words and punctuation
/// - [`SummarizeError::Analyzer`] if the analyzer fails
pub fn summarize<A>(text: &str, analyzer: &A, max_sentences: usize) -> Result<String>
where
    A: TextAnalyzer + ?Sized,
{
    let config = SummarizerConfig::default().with_num_sentences(max_sentences);
    pipeline::runner::Pipeline::from_config(&config)
        .run(text, analyzer, &mut NoopObserver)
        .map(|summary| summary.text)
}
