//! Video quality score on a 0-10 scale.
//!
//! The score is the batch's average sentiment mapped from [-1, 1] onto
//! [0, 10] and rounded to two decimals.
//!
//! ```rust
//! use vidalyzer::analysis::quality::{quality_from_sentiments, QualityScore};
//!
//! let score = quality_from_sentiments(&[1.0, -1.0, 0.0]);
//! assert_eq!(score, QualityScore::new(5.0));
//!
//! // Out-of-bounds values are clamped
//! assert_eq!(QualityScore::new(12.0).value(), 10.0);
//! ```

use serde::{Deserialize, Serialize};

/// Score on 0-10 scale.
///
/// Values are automatically clamped to the [0.0, 10.0] range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct QualityScore(f64);

impl QualityScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 10.0;
    /// Score used when there is nothing to average.
    pub const NEUTRAL: QualityScore = QualityScore(5.0);

    /// Create a new score, clamping to [0.0, 10.0]. NaN maps to neutral.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Map an average sentiment in [-1, 1] onto the 0-10 scale.
    pub fn from_average_sentiment(average: f64) -> Self {
        Self::new(round_to_hundredths((average + 1.0) * 5.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for QualityScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl std::fmt::Display for QualityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average of the given per-comment sentiments, 0.0 for an empty batch.
pub fn average_sentiment(sentiments: &[f64]) -> f64 {
    if sentiments.is_empty() {
        return 0.0;
    }
    sentiments.iter().sum::<f64>() / sentiments.len() as f64
}

/// Quality score of one batch of comment sentiments.
///
/// The average divides by the batch size. An empty batch scores neutral.
pub fn quality_from_sentiments(sentiments: &[f64]) -> QualityScore {
    if sentiments.is_empty() {
        return QualityScore::NEUTRAL;
    }
    QualityScore::from_average_sentiment(average_sentiment(sentiments))
}
