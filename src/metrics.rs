//! Word and character counts for submitted text

use serde::Serialize;

/// Number of whitespace-delimited tokens in `text`.
///
/// Runs of whitespace count as a single separator and leading/trailing
/// whitespace is ignored, so an empty or blank string yields 0.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of characters in `text` once surrounding whitespace is trimmed.
///
/// Counts Unicode scalar values, not bytes, and includes internal whitespace.
pub fn char_count(text: &str) -> usize {
    text.trim().chars().count()
}

/// Counts reported by the word-count endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub char_count: usize,
}

impl TextMetrics {
    pub fn of(text: &str) -> Self {
        Self {
            word_count: word_count(text),
            char_count: char_count(text),
        }
    }
}
