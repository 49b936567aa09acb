//! Keyword-presence sentiment for a single comment.
//!
//! Each list word counts at most once per comment and matches as a substring
//! of the lowercased text, so "goodness" counts as "good" and "bad bad bad"
//! counts as a single negative hit.

use crate::core::SentimentScorer;

pub const POSITIVE_WORDS: [&str; 7] = [
    "good",
    "great",
    "excellent",
    "amazing",
    "love",
    "best",
    "awesome",
];

pub const NEGATIVE_WORDS: [&str; 7] = [
    "bad",
    "terrible",
    "awful",
    "hate",
    "worst",
    "poor",
    "disappointing",
];

/// How many distinct positive and negative list words a text contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeywordCounts {
    pub positive: usize,
    pub negative: usize,
}

impl KeywordCounts {
    pub fn from_text(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let present = |words: &[&str]| words.iter().filter(|w| lowered.contains(*w)).count();
        Self {
            positive: present(&POSITIVE_WORDS),
            negative: present(&NEGATIVE_WORDS),
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// (positive - negative) / (positive + negative), or 0.0 without any hit.
    pub fn sentiment(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        (self.positive as f64 - self.negative as f64) / self.total() as f64
    }
}

/// Sentiment of a comment text in [-1, 1].
pub fn sentiment_score(text: &str) -> f64 {
    KeywordCounts::from_text(text).sentiment()
}

/// Fixed-list keyword scorer used by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSentimentScorer;

impl KeywordSentimentScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for KeywordSentimentScorer {
    fn score(&self, text: &str) -> f64 {
        sentiment_score(text)
    }

    fn methodology(&self) -> &str {
        "Keyword presence: (positive - negative) / (positive + negative)"
    }
}
