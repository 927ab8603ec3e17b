//! Sentence segmentation
//!
//! Sentence boundaries follow UAX #29. Each segment is trimmed of surrounding
//! whitespace, and a segment that ends in a known abbreviation ("Dr.",
//! "e.g.") or inside a run of initials ("J. R. R.") is joined with the one
//! that follows it.

use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that end with a period but rarely end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "mt.", "vs.", "e.g.", "i.e.",
    "inc.", "ltd.", "co.", "corp.", "no.", "fig.", "approx.", "dept.", "gen.", "gov.", "sen.",
    "rep.", "rev.", "capt.", "lt.", "col.", "sgt.",
];

/// A sentence span: trimmed text and its byte offsets in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSpan<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Rule-based sentence segmenter
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    abbreviations: FxHashSet<String>,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// A segmenter that never joins segments
    pub fn without_abbreviations() -> Self {
        Self {
            abbreviations: FxHashSet::default(),
        }
    }

    /// Register extra abbreviations (with their trailing period, e.g. `"approx."`).
    pub fn add_abbreviations(&mut self, words: &[&str]) {
        for word in words {
            self.abbreviations.insert(word.to_lowercase());
        }
    }

    /// Split `text` into trimmed, non-empty sentence spans in document order.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<SentenceSpan<'a>> {
        let mut segments = text
            .split_sentence_bound_indices()
            .filter_map(|(offset, segment)| {
                let trimmed = segment.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let start = offset + (segment.len() - segment.trim_start().len());
                Some(SentenceSpan {
                    text: trimmed,
                    start,
                    end: start + trimmed.len(),
                })
            })
            .peekable();

        let mut spans: Vec<SentenceSpan<'a>> = Vec::new();
        let mut join_next = false;

        while let Some(segment) = segments.next() {
            match spans.last_mut() {
                Some(prev) if join_next => {
                    prev.end = segment.end;
                    prev.text = &text[prev.start..segment.end];
                }
                _ => spans.push(segment),
            }

            let next = segments.peek().map(|s| s.text);
            join_next = spans
                .last()
                .map(|s| self.continues_after(s.text, next))
                .unwrap_or(false);
        }

        spans
    }

    /// Whether a segment ending in `sentence` runs on into `next`.
    ///
    /// Known abbreviations always join. A lone initial joins only inside a
    /// run of initials ("J. R. R. Tolkien"), so "vitamin C." still ends a
    /// sentence.
    fn continues_after(&self, sentence: &str, next: Option<&str>) -> bool {
        let mut words = sentence.split_whitespace().rev();
        let Some(last) = words.next().map(strip_leading_punct) else {
            return false;
        };
        if !last.ends_with('.') {
            return false;
        }
        if self.abbreviations.contains(&last.to_lowercase()) {
            return true;
        }
        if !is_initial(last) {
            return false;
        }

        let after_initial = words.next().map(strip_leading_punct).is_some_and(is_initial);
        let before_initial =
            next.is_some_and(|n| n.split_whitespace().count() == 1 && is_initial(n));
        after_initial || before_initial
    }
}

fn strip_leading_punct(word: &str) -> &str {
    word.trim_start_matches(|c: char| !c.is_alphanumeric())
}

/// A single uppercase letter followed by a period, such as "J."
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if c.is_uppercase()
    )
}
