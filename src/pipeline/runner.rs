//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! [`Pipeline::run`] executes the summarization stages in order, threading
//! the analyzed document, keyword table and scores between them and
//! notifying a [`SummaryObserver`] at each boundary.
//!
//! Stages:
//! 1. Analyze (tokenize, classify, segment)
//! 2. Extract keywords
//! 3. Build the normalized frequency table
//! 4. Score sentences
//! 5. Rank
//! 6. Truncate and assemble

use crate::errors::{Result, SummarizeError};
use crate::nlp::analyzer::TextAnalyzer;
use crate::pipeline::observer::{
    StageClock, StageReport, SummaryObserver, STAGE_ANALYZE, STAGE_ASSEMBLE, STAGE_FREQUENCIES,
    STAGE_KEYWORDS, STAGE_RANK, STAGE_SCORE,
};
use crate::summarizer::frequency::WordFrequencies;
use crate::summarizer::scoring::score_sentences;
use crate::summarizer::selector::{SentenceSelector, Summary};
use crate::types::{ScoringMode, SummarizerConfig, Token};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// Emit a debug event when the `tracing` feature is enabled.
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// A configured summarization run.
#[derive(Debug, Clone)]
pub struct Pipeline {
    selector: SentenceSelector,
    num_sentences: usize,
    scoring: ScoringMode,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl Pipeline {
    pub fn from_config(cfg: &SummarizerConfig) -> Self {
        Self {
            selector: SentenceSelector::new(cfg.num_sentences),
            num_sentences: cfg.num_sentences,
            scoring: cfg.scoring,
        }
    }

    /// Execute the pipeline on `text`.
    ///
    /// Blank input short-circuits to an empty summary before anything else,
    /// including argument checks; the analyzer is not called.
    pub fn run<A>(
        &self,
        text: &str,
        analyzer: &A,
        observer: &mut impl SummaryObserver,
    ) -> Result<Summary>
    where
        A: TextAnalyzer + ?Sized,
    {
        if text.trim().is_empty() {
            trace_debug!("blank input, returning empty summary");
            return Ok(Summary::empty());
        }
        if self.num_sentences == 0 {
            return Err(SummarizeError::InvalidArgument {
                name: "max_sentences",
                reason: "must be at least 1".to_string(),
            });
        }

        // Stage 1: Analyze
        let doc = {
            trace_stage!(STAGE_ANALYZE);
            observer.on_stage_start(STAGE_ANALYZE);
            let clock = StageClock::start();
            let doc = analyzer.analyze(text)?;
            let report = StageReport::new(clock.elapsed()).with_items(doc.tokens.len());
            observer.on_stage_end(STAGE_ANALYZE, &report);
            trace_debug!(
                tokens = doc.tokens.len(),
                sentences = doc.sentences.len(),
                "analyzed input"
            );
            doc
        };
        observer.on_document(&doc);

        // Stage 2: Extract keywords
        let keywords: Vec<&Token> = {
            trace_stage!(STAGE_KEYWORDS);
            observer.on_stage_start(STAGE_KEYWORDS);
            let clock = StageClock::start();
            let keywords: Vec<&Token> = doc.keywords().collect();
            let report = StageReport::new(clock.elapsed()).with_items(keywords.len());
            observer.on_stage_end(STAGE_KEYWORDS, &report);
            keywords
        };

        // Stage 3: Frequency table
        let frequencies = {
            trace_stage!(STAGE_FREQUENCIES);
            observer.on_stage_start(STAGE_FREQUENCIES);
            let clock = StageClock::start();
            let frequencies = WordFrequencies::from_tokens(keywords.iter().copied());
            let report = StageReport::new(clock.elapsed())
                .with_items(frequencies.as_ref().map(|f| f.len()).unwrap_or(0));
            observer.on_stage_end(STAGE_FREQUENCIES, &report);
            frequencies?
        };
        trace_debug!(
            keywords = keywords.len(),
            distinct = frequencies.len(),
            max_count = frequencies.max_count(),
            "built frequency table"
        );
        observer.on_frequencies(&frequencies);

        // Stage 4: Score sentences
        let scores = {
            trace_stage!(STAGE_SCORE);
            observer.on_stage_start(STAGE_SCORE);
            let clock = StageClock::start();
            let scores = score_sentences(&doc, &frequencies, self.scoring);
            let report = StageReport::new(clock.elapsed()).with_items(scores.len());
            observer.on_stage_end(STAGE_SCORE, &report);
            scores
        };
        observer.on_scores(&scores);

        // Stage 5: Rank
        let ranked = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranked = self.selector.rank(&scores);
            let report = StageReport::new(clock.elapsed()).with_items(ranked.len());
            observer.on_stage_end(STAGE_RANK, &report);
            ranked
        };

        // Stage 6: Truncate and assemble
        let summary = {
            trace_stage!(STAGE_ASSEMBLE);
            observer.on_stage_start(STAGE_ASSEMBLE);
            let clock = StageClock::start();
            let summary = self.selector.select(&doc.sentences, &ranked);
            let report = StageReport::new(clock.elapsed()).with_items(summary.sentences.len());
            observer.on_stage_end(STAGE_ASSEMBLE, &report);
            summary
        };
        trace_debug!(
            selected = summary.sentences.len(),
            scored = summary.scored_sentences,
            "assembled summary"
        );

        Ok(summary)
    }
}
