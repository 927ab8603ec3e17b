//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers are notified at stage boundaries without coupling to stage
//! logic. Every hook has an empty default body, so an observer only
//! overrides what it needs.

use std::time::{Duration, Instant};

use crate::summarizer::frequency::WordFrequencies;
use crate::summarizer::scoring::SentenceScore;
use crate::types::Document;

pub const STAGE_ANALYZE: &str = "analyze";
pub const STAGE_KEYWORDS: &str = "keywords";
pub const STAGE_FREQUENCIES: &str = "frequencies";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_ASSEMBLE: &str = "assemble";

/// Stage names in execution order
pub const STAGES: [&str; 6] = [
    STAGE_ANALYZE,
    STAGE_KEYWORDS,
    STAGE_FREQUENCIES,
    STAGE_SCORE,
    STAGE_RANK,
    STAGE_ASSEMBLE,
];

/// Measures the wall-clock time of one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a stage did: elapsed time plus the item count it produced, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach the number of items produced by the stage
    /// (tokens, keywords, scored sentences, ...).
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Receives callbacks while a summary is computed.
pub trait SummaryObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// The analyzer's output
    fn on_document(&mut self, _doc: &Document) {}

    fn on_frequencies(&mut self, _frequencies: &WordFrequencies) {}

    /// Sentence scores, in document order
    fn on_scores(&mut self, _scores: &[SentenceScore]) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SummaryObserver for NoopObserver {}

/// Records a [`StageReport`] per finished stage.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report of the named stage, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl SummaryObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}
