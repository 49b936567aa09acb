use serde::{Deserialize, Serialize};

use super::quality::QualityScore;

pub const HIGHLY_RECOMMENDED_THRESHOLD: f64 = 8.0;
pub const RECOMMENDED_THRESHOLD: f64 = 6.0;
pub const MIXED_THRESHOLD: f64 = 4.0;

/// Recommendation tier chosen by thresholding a quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    HighlyRecommended,
    Recommended,
    Mixed,
    NotRecommended,
}

impl Recommendation {
    /// Lower bounds are inclusive: 8.0 is highly recommended, 7.99 is not.
    pub fn from_score(score: QualityScore) -> Self {
        let value = score.value();
        if value >= HIGHLY_RECOMMENDED_THRESHOLD {
            Self::HighlyRecommended
        } else if value >= RECOMMENDED_THRESHOLD {
            Self::Recommended
        } else if value >= MIXED_THRESHOLD {
            Self::Mixed
        } else {
            Self::NotRecommended
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Highly recommended! This video has excellent reviews.",
            Self::Recommended => "Recommended. This video has good reviews overall.",
            Self::Mixed => "Mixed reviews. Watch at your own discretion.",
            Self::NotRecommended => "Not recommended. This video has poor reviews.",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
