//! Natural Language Processing components
//!
//! Tokenization, sentence segmentation and stop-word classification, combined
//! into the built-in [`RuleBasedAnalyzer`](analyzer::RuleBasedAnalyzer).

pub mod analyzer;
pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;
