//! Keyword frequency table
//!
//! Counts keyword occurrences (tokens that are neither stop-words nor
//! punctuation, lowercased) and rescales them so the most frequent keyword
//! weighs 1.0.

use rustc_hash::FxHashMap;

use crate::errors::{Result, SummarizeError};
use crate::types::Token;

/// Normalized keyword frequencies
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    weights: FxHashMap<String, f64>,
    max_count: usize,
    total: usize,
}

impl WordFrequencies {
    /// Build the table from a token stream.
    ///
    /// Non-keyword tokens are skipped. Fails with
    /// [`SummarizeError::NoScorableContent`] when no keyword remains.
    pub fn from_tokens<'a, I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        let mut total = 0;
        for token in tokens.into_iter().filter(|t| t.is_keyword()) {
            *counts.entry(token.norm.as_str()).or_insert(0) += 1;
            total += 1;
        }

        let max_count = counts
            .values()
            .copied()
            .max()
            .ok_or(SummarizeError::NoScorableContent)?;

        let weights = counts
            .into_iter()
            .map(|(word, count)| (word.to_string(), count as f64 / max_count as f64))
            .collect();

        Ok(Self {
            weights,
            max_count,
            total,
        })
    }

    /// Normalized frequency of `word` (already lowercased), if it is a keyword
    #[inline]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// Raw count of the most frequent keyword
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Number of keyword occurrences counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Keywords sorted by weight descending, then alphabetically.
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .weights
            .iter()
            .map(|(w, &s)| (w.as_str(), s))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, idx: usize) -> Token {
        Token::new(text, 0, text.len(), 0, idx)
    }

    #[test]
    fn test_normalized_to_max() {
        let tokens = vec![
            token("Cats", 0),
            token("sleep", 1),
            token("cats", 2),
            token("lot", 3),
        ];
        let freqs = WordFrequencies::from_tokens(&tokens).unwrap();

        assert_eq!(freqs.max_count(), 2);
        assert_eq!(freqs.total(), 4);
        assert_eq!(freqs.len(), 3);
        assert!((freqs.get("cats").unwrap() - 1.0).abs() < 1e-9);
        assert!((freqs.get("sleep").unwrap() - 0.5).abs() < 1e-9);
        assert!(freqs.get("Cats").is_none());
    }

    #[test]
    fn test_stopwords_and_punct_excluded() {
        let tokens = vec![
            token("the", 0).with_stopword(true),
            token("dog", 1),
            token(".", 2).with_punct(true),
        ];
        let freqs = WordFrequencies::from_tokens(&tokens).unwrap();

        assert_eq!(freqs.len(), 1);
        assert!(freqs.get("the").is_none());
        assert!(freqs.get(".").is_none());
    }

    #[test]
    fn test_no_keywords_fails() {
        let tokens = vec![
            token("the", 0).with_stopword(true),
            token("!", 1).with_punct(true),
        ];
        let err = WordFrequencies::from_tokens(&tokens).unwrap_err();
        assert!(matches!(err, SummarizeError::NoScorableContent));

        let none: Vec<Token> = Vec::new();
        assert!(WordFrequencies::from_tokens(&none).is_err());
    }

    #[test]
    fn test_weights_in_unit_interval() {
        let tokens: Vec<Token> = ["a1", "b2", "b2", "c3", "c3", "c3"]
            .iter()
            .enumerate()
            .map(|(i, w)| token(w, i))
            .collect();
        let freqs = WordFrequencies::from_tokens(&tokens).unwrap();

        for (_, weight) in freqs.top_n(10) {
            assert!(weight > 0.0 && weight <= 1.0);
        }
        let top = freqs.top_n(2);
        assert_eq!(top[0].0, "c3");
        assert_eq!(top[1].0, "b2");
    }
}
