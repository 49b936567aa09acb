use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::quality::QualityScore;
use super::recommendation::Recommendation;

/// Outcome of one analysis run. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    result_id: String,
    analyzer_id: String,
    method: String,
    quality_score: QualityScore,
    total_comments_analyzed: usize,
    recommendation: Recommendation,
    analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn new(
        analyzer_id: impl Into<String>,
        method: impl Into<String>,
        quality_score: QualityScore,
        total_comments_analyzed: usize,
    ) -> Self {
        let analyzed_at = Utc::now();
        Self {
            result_id: format!("result_{}", analyzed_at.timestamp_millis()),
            analyzer_id: analyzer_id.into(),
            method: method.into(),
            quality_score,
            total_comments_analyzed,
            recommendation: Recommendation::from_score(quality_score),
            analyzed_at,
        }
    }

    pub fn result_id(&self) -> &str {
        &self.result_id
    }

    /// Id of the analyzer that produced this result.
    pub fn analyzer_id(&self) -> &str {
        &self.analyzer_id
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn quality_score(&self) -> QualityScore {
        self.quality_score
    }

    pub fn total_comments_analyzed(&self) -> usize {
        self.total_comments_analyzed
    }

    pub fn recommendation(&self) -> Recommendation {
        self.recommendation
    }

    pub fn analyzed_at(&self) -> DateTime<Utc> {
        self.analyzed_at
    }

    /// Plain-text body written by the save-result operation.
    pub fn to_export_text(&self) -> String {
        format!(
            "Quality Score: {}/10\nRecommendation: {}\nTotal Comments: {}\nAnalyzer: {} ({})\n",
            self.quality_score,
            self.recommendation,
            self.total_comments_analyzed,
            self.analyzer_id,
            self.method
        )
    }
}
