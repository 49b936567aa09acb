// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod platform;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    Comment, CreatorProfile, EntityKind, EntityStore, Error, Result, SentimentScorer, User,
    UserKind, UserRole, Video, ViewerProfile,
};

pub use crate::analysis::{
    quality_from_sentiments, sentiment_score, AnalysisResult, Analyzer, KeywordSentimentScorer,
    QualityScore, Recommendation,
};

pub use crate::config::VidalyzerConfig;
pub use crate::platform::{NewVideo, Platform, Reaction};
pub use crate::store::InMemoryStore;
