//! Word tokenization
//!
//! Splits text on Unicode word boundaries (UAX #29). Whitespace segments are
//! dropped; every other segment, including punctuation, becomes a token.

use unicode_segmentation::UnicodeSegmentation;

/// A raw token span before sentence assignment and stop-word flagging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    pub is_punct: bool,
}

/// Unicode word-boundary tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize `text` into spans with byte offsets.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<TokenSpan<'a>> {
        text.split_word_bound_indices()
            .filter(|(_, segment)| !segment.chars().all(char::is_whitespace))
            .map(|(start, segment)| TokenSpan {
                text: segment,
                start,
                end: start + segment.len(),
                is_punct: is_punctuation(segment),
            })
            .collect()
    }
}

/// True when every character of `s` is a punctuation mark.
pub fn is_punctuation(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_punctuation_char)
}

fn is_punctuation_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation()
            && !matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~');
    }
    matches!(
        c,
        '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}'
            | '\u{037E}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{205E}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3011}'
            | '\u{3014}'..='\u{301F}'
            | '\u{FF01}'..='\u{FF0F}'
            | '\u{FF1A}'..='\u{FF1B}'
            | '\u{FF1F}'
    )
}
