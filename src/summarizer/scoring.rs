//! Sentence scoring
//!
//! A sentence's score is the sum of the normalized frequencies of its tokens.
//! Sentences without a single matching token are left out of the table.

use serde::Serialize;

use super::frequency::WordFrequencies;
use crate::types::{Document, ScoringMode};

/// Score of one sentence, keyed by its document index
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentenceScore {
    pub index: usize,
    pub score: f64,
    /// Number of tokens that matched the frequency table
    pub matches: usize,
}

/// Score every sentence of `doc` in document order.
///
/// In [`ScoringMode::AllTokens`] every token is probed, stop-words and
/// punctuation included; those never appear in the table, so
/// [`ScoringMode::KeywordsOnly`] yields the same scores.
pub fn score_sentences(
    doc: &Document,
    frequencies: &WordFrequencies,
    mode: ScoringMode,
) -> Vec<SentenceScore> {
    let mut scores = Vec::with_capacity(doc.sentences.len());

    for sentence in &doc.sentences {
        let mut score = 0.0;
        let mut matches = 0;

        for token in doc.sentence_tokens(sentence) {
            if mode == ScoringMode::KeywordsOnly && !token.is_keyword() {
                continue;
            }
            if let Some(weight) = frequencies.get(&token.norm) {
                score += weight;
                matches += 1;
            }
        }

        if matches > 0 {
            scores.push(SentenceScore {
                index: sentence.index,
                score,
                matches,
            });
        }
    }

    scores
}
