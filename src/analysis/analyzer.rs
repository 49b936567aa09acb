use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Comment, SentimentScorer, Video};

use super::quality::quality_from_sentiments;
use super::result::AnalysisResult;
use super::sentiment::KeywordSentimentScorer;

/// Scores a video's comments and turns the batch into an [`AnalysisResult`].
///
/// The analyzer remembers the last sentiment it computed for every comment
/// id it has seen. That map is informational only: a quality score is always
/// computed from the comments of the current call.
pub struct Analyzer<S = KeywordSentimentScorer> {
    id: String,
    method: String,
    scorer: S,
    sentiment_scores: IndexMap<String, f64>,
}

impl Analyzer<KeywordSentimentScorer> {
    pub fn new(id: impl Into<String>, method: impl Into<String>) -> Self {
        Self::with_scorer(id, method, KeywordSentimentScorer::new())
    }
}

impl<S: SentimentScorer> Analyzer<S> {
    pub fn with_scorer(id: impl Into<String>, method: impl Into<String>, scorer: S) -> Self {
        Self {
            id: id.into(),
            method: method.into(),
            scorer,
            sentiment_scores: IndexMap::new(),
        }
    }

    pub fn methodology(&self) -> &str {
        self.scorer.methodology()
    }

    /// Last sentiment recorded for a comment id.
    pub fn recorded_sentiment(&self, comment_id: &str) -> Option<f64> {
        self.sentiment_scores.get(comment_id).copied()
    }

    /// Drop recorded sentiments for comments that no longer exist.
    pub fn forget<'c>(&mut self, comment_ids: impl IntoIterator<Item = &'c str>) {
        for id in comment_ids {
            self.sentiment_scores.shift_remove(id);
        }
    }

    /// Score every comment of the batch and build a fresh result.
    ///
    /// An empty batch yields the neutral score. Callers are expected to
    /// reject empty videos before getting here.
    pub fn analyze_comments(&mut self, comments: &[Comment]) -> AnalysisResult {
        let sentiments: Vec<f64> = comments
            .iter()
            .map(|comment| {
                let sentiment = self.scorer.score(comment.content());
                self.sentiment_scores
                    .insert(comment.id().to_string(), sentiment);
                sentiment
            })
            .collect();

        let quality = quality_from_sentiments(&sentiments);
        debug!(
            analyzer = %self.id,
            comments = comments.len(),
            score = quality.value(),
            "Scored comment batch"
        );
        AnalysisResult::new(&self.id, &self.method, quality, comments.len())
    }

    /// One-line summary, e.g. `Analysis Report for 'Demo': Score 6.67/10`.
    pub fn generate_report(&mut self, video: &Video) -> String {
        let result = self.analyze_comments(video.comments());
        format!(
            "Analysis Report for '{}': Score {}/10",
            video.title(),
            result.quality_score()
        )
    }
}
