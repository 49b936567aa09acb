//! Core trait definitions for clean module boundaries
//!
//! This module contains the seams between the platform service and the
//! pieces it is composed from: where entities live and how comment text is
//! scored.

use crate::analysis::AnalysisResult;

use super::comment::Comment;
use super::errors::Result;
use super::user::User;
use super::video::Video;

/// Trait for scoring the sentiment of a piece of comment text
pub trait SentimentScorer {
    /// Sentiment in [-1, 1]; 0.0 means no signal
    fn score(&self, text: &str) -> f64;

    /// Get a description of the scoring methodology
    fn methodology(&self) -> &str;
}

/// Keyed storage for every entity kind of a session.
///
/// Ids are supplied by the caller. Inserting under an existing id replaces
/// the previous entity and returns it.
pub trait EntityStore {
    fn user(&self, id: &str) -> Option<&User>;
    fn user_mut(&mut self, id: &str) -> Option<&mut User>;
    fn insert_user(&mut self, user: User) -> Option<User>;
    fn remove_user(&mut self, id: &str) -> Option<User>;
    /// All users in insertion order
    fn users(&self) -> Box<dyn Iterator<Item = &User> + '_>;

    fn video(&self, id: &str) -> Option<&Video>;
    fn video_mut(&mut self, id: &str) -> Option<&mut Video>;
    fn insert_video(&mut self, video: Video) -> Option<Video>;
    /// Removes the video and every comment it owns
    fn remove_video(&mut self, id: &str) -> Option<Video>;
    fn videos(&self) -> Box<dyn Iterator<Item = &Video> + '_>;
    fn videos_mut(&mut self) -> Box<dyn Iterator<Item = &mut Video> + '_>;

    fn comment(&self, id: &str) -> Option<&Comment>;
    fn comment_mut(&mut self, id: &str) -> Option<&mut Comment>;
    /// Id of the video a comment belongs to
    fn comment_video_id(&self, comment_id: &str) -> Option<&str>;
    /// Appends the comment to the video's collection.
    ///
    /// Fails with `NotFound` when the video does not exist.
    fn insert_comment(&mut self, video_id: &str, comment: Comment) -> Result<()>;
    /// All comments in posting order
    fn comments(&self) -> Box<dyn Iterator<Item = &Comment> + '_>;

    fn store_result(&mut self, video_id: &str, result: AnalysisResult) -> Option<AnalysisResult>;
    fn result(&self, video_id: &str) -> Option<&AnalysisResult>;
    fn remove_result(&mut self, video_id: &str) -> Option<AnalysisResult>;
}
