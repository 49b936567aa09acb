//! Comment analysis: per-comment sentiment, per-video quality score, and
//! the recommendation ladder on top of it.

pub mod analyzer;
pub mod quality;
pub mod recommendation;
pub mod result;
pub mod sentiment;

pub use analyzer::Analyzer;
pub use quality::{quality_from_sentiments, QualityScore};
pub use recommendation::Recommendation;
pub use result::AnalysisResult;
pub use sentiment::{sentiment_score, KeywordCounts, KeywordSentimentScorer};
