//! Summarization components
//!
//! Frequency-ranked extractive summarization: keyword frequencies are
//! normalized against the most frequent keyword, sentences are scored by the
//! sum of their words' weights, and the best-scoring sentences form the
//! summary.

pub mod frequency;
pub mod scoring;
pub mod selector;

use rayon::prelude::*;

use crate::errors::Result;
use crate::nlp::analyzer::TextAnalyzer;
use crate::pipeline::observer::{NoopObserver, SummaryObserver};
use crate::pipeline::runner::Pipeline;
use crate::types::SummarizerConfig;
pub use selector::{SelectedSentence, Summary};

/// Extractive summarizer bound to an analyzer
///
/// The analyzer is built once and reused for every call; the summarizer holds
/// no other state.
#[derive(Debug, Clone)]
pub struct Summarizer<A> {
    analyzer: A,
    config: SummarizerConfig,
}

impl<A: TextAnalyzer> Summarizer<A> {
    /// Create a summarizer with the default config (3 sentences)
    pub fn new(analyzer: A) -> Self {
        Self::with_config(analyzer, SummarizerConfig::default())
    }

    pub fn with_config(analyzer: A, config: SummarizerConfig) -> Self {
        Self { analyzer, config }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    fn pipeline(&self) -> Pipeline {
        Pipeline::from_config(&self.config)
    }

    /// Summarize `text` into at most `num_sentences` sentences.
    pub fn summarize(&self, text: &str) -> Result<String> {
        self.summarize_detailed(text).map(|summary| summary.text)
    }

    /// Summarize and keep per-sentence scores.
    pub fn summarize_detailed(&self, text: &str) -> Result<Summary> {
        self.summarize_with_observer(text, &mut NoopObserver)
    }

    /// Summarize while reporting stage boundaries to `observer`.
    pub fn summarize_with_observer(
        &self,
        text: &str,
        observer: &mut impl SummaryObserver,
    ) -> Result<Summary> {
        self.pipeline().run(text, &self.analyzer, observer)
    }

    /// Summarize independent texts in parallel; results keep input order.
    pub fn summarize_batch<S>(&self, texts: &[S]) -> Vec<Result<String>>
    where
        S: AsRef<str> + Sync,
    {
        let pipeline = self.pipeline();
        texts
            .par_iter()
            .map(|text| {
                pipeline
                    .run(text.as_ref(), &self.analyzer, &mut NoopObserver)
                    .map(|summary| summary.text)
            })
            .collect()
    }
}
