//! Frequency-ranked sentence selection
//!
//! Ranks scored sentences by score, highest first, with document order as the
//! tie-break, and keeps the top `num_sentences`. The summary keeps rank
//! order; it is not restored to document order.

use serde::Serialize;

use super::scoring::SentenceScore;
use crate::types::Sentence;

/// A selected sentence with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSentence {
    /// Position of the sentence in the document
    pub index: usize,
    /// Surface text of the sentence
    pub text: String,
    pub score: f64,
}

/// Result of sentence selection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences joined with a single space
    pub text: String,
    /// Selected sentences in rank order
    pub sentences: Vec<SelectedSentence>,
    /// Number of sentences that received a score
    pub scored_sentences: usize,
}

impl Summary {
    /// The summary of blank input
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Frequency-ranked sentence selector
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    num_sentences: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new(3)
    }
}

impl SentenceSelector {
    pub fn new(num_sentences: usize) -> Self {
        Self { num_sentences }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Order `scores` by score descending, then by sentence index.
    pub fn rank(&self, scores: &[SentenceScore]) -> Vec<SentenceScore> {
        let mut ranked = scores.to_vec();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
        ranked
    }

    /// Rank, truncate and assemble the summary.
    ///
    /// Scores whose index has no matching sentence are skipped.
    pub fn select(&self, sentences: &[Sentence], scores: &[SentenceScore]) -> Summary {
        let selected: Vec<SelectedSentence> = self
            .rank(scores)
            .into_iter()
            .filter_map(|s| {
                sentences.get(s.index).map(|sentence| SelectedSentence {
                    index: s.index,
                    text: sentence.text.clone(),
                    score: s.score,
                })
            })
            .take(self.num_sentences)
            .collect();

        Summary {
            text: join(&selected),
            sentences: selected,
            scored_sentences: scores.len(),
        }
    }
}

fn join(sentences: &[SelectedSentence]) -> String {
    sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
