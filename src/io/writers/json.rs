use anyhow::Result;
use serde::Serialize;

use crate::analysis::{AnalysisResult, Analyzer, KeywordCounts};
use crate::core::{SentimentScorer, Video};

#[derive(Debug, Serialize)]
struct KeywordHits {
    positive: usize,
    negative: usize,
}

#[derive(Debug, Serialize)]
struct CommentSentiment<'a> {
    id: &'a str,
    /// Score recorded by the analyzer's scorer; absent if never analysed
    sentiment: Option<f64>,
    /// Lexicon matches, independent of the scorer in use
    keyword_hits: KeywordHits,
}

#[derive(Debug, Serialize)]
struct AnalysisSummary<'a> {
    video_id: &'a str,
    title: &'a str,
    methodology: &'a str,
    comments: Vec<CommentSentiment<'a>>,
    result: &'a AnalysisResult,
}

/// Pretty JSON document describing one analysed video.
pub fn analysis_summary_json<S: SentimentScorer>(
    video: &Video,
    result: &AnalysisResult,
    analyzer: &Analyzer<S>,
) -> Result<String> {
    let comments = video
        .comments()
        .iter()
        .map(|comment| {
            let counts = KeywordCounts::from_text(comment.content());
            CommentSentiment {
                id: comment.id(),
                sentiment: analyzer.recorded_sentiment(comment.id()),
                keyword_hits: KeywordHits {
                    positive: counts.positive,
                    negative: counts.negative,
                },
            }
        })
        .collect();
    let summary = AnalysisSummary {
        video_id: video.id(),
        title: video.title(),
        methodology: analyzer.methodology(),
        comments,
        result,
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}
