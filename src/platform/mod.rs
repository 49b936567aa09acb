//! Application service for a single session.
//!
//! `Platform` owns the entity store it is given and implements every
//! operation the interactive surface can issue. Each operation validates
//! all of its lookups before mutating anything, so a failed call leaves the
//! store untouched.

use tracing::{debug, info};

use crate::analysis::{AnalysisResult, Analyzer};
use crate::config::AnalysisSettings;
use crate::core::{Comment, EntityKind, EntityStore, Error, Result, User, UserKind, Video};
use crate::store::InMemoryStore;

/// Fields of a new video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub id: String,
    pub title: String,
    pub url: String,
    pub duration_secs: u32,
    pub category: String,
}

impl NewVideo {
    fn into_video(self) -> Video {
        Video::new(
            self.id,
            self.title,
            self.url,
            self.duration_secs,
            self.category,
        )
    }
}

/// Which reaction to record on a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Dislike,
}

pub struct Platform<S = InMemoryStore> {
    store: S,
    analyzer: Analyzer,
}

impl Platform<InMemoryStore> {
    pub fn new(settings: &AnalysisSettings) -> Self {
        Self::with_store(
            InMemoryStore::new(),
            Analyzer::new(&settings.analyzer_id, &settings.method),
        )
    }
}

impl Default for Platform<InMemoryStore> {
    fn default() -> Self {
        Self::new(&AnalysisSettings::default())
    }
}

impl<S: EntityStore> Platform<S> {
    pub fn with_store(store: S, analyzer: Analyzer) -> Self {
        Self { store, analyzer }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    // ----- users -----

    pub fn create_user(
        &mut self,
        kind: UserKind,
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<&User> {
        let user = User::with_kind(kind, id, username, email);
        let id = user.id().to_string();
        if let Some(previous) = self.store.insert_user(user) {
            debug!(user = %id, previous = previous.username(), "Replaced existing user");
        }
        info!(user = %id, kind = kind.label(), "Created user");
        self.user(&id)
    }

    pub fn user(&self, id: &str) -> Result<&User> {
        self.store
            .user(id)
            .ok_or_else(|| Error::not_found(EntityKind::User, id))
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.store.users()
    }

    pub fn creators(&self) -> impl Iterator<Item = &User> {
        self.store.users().filter(|u| u.as_creator().is_some())
    }

    pub fn creator(&self, id: &str) -> Result<&User> {
        let user = self
            .store
            .user(id)
            .ok_or_else(|| Error::not_found(EntityKind::Creator, id))?;
        match user.as_creator() {
            Some(_) => Ok(user),
            None => Err(Error::role_mismatch(id, EntityKind::Creator)),
        }
    }

    pub fn update_profile(
        &mut self,
        id: &str,
        username: Option<String>,
        email: Option<String>,
    ) -> Result<()> {
        let user = self
            .store
            .user_mut(id)
            .ok_or_else(|| Error::not_found(EntityKind::User, id))?;
        if let Some(username) = username {
            user.set_username(username);
        }
        if let Some(email) = email {
            user.set_email(email);
        }
        Ok(())
    }

    /// Remove a user. Comments they wrote stay, with the author cleared.
    pub fn delete_user(&mut self, id: &str) -> Result<User> {
        let user = self
            .store
            .remove_user(id)
            .ok_or_else(|| Error::not_found(EntityKind::User, id))?;

        let mut orphaned = 0usize;
        for video in self.store.videos_mut() {
            for comment in video.comments_mut() {
                if comment.detach_author(id) {
                    orphaned += 1;
                }
            }
        }
        info!(user = %id, orphaned_comments = orphaned, "Deleted user");
        Ok(user)
    }

    // ----- videos -----

    /// Create a video and append it to the creator's uploads.
    pub fn create_video(&mut self, creator_id: &str, video: NewVideo) -> Result<&Video> {
        self.creator(creator_id)?;

        let video_id = video.id.clone();
        if let Some(previous) = self.store.insert_video(video.into_video()) {
            debug!(video = %video_id, title = previous.title(), "Replaced existing video");
            self.disown_video(&video_id);
            self.store.remove_result(&video_id);
            self.analyzer
                .forget(previous.comments().iter().map(Comment::id));
        }
        self.store
            .user_mut(creator_id)
            .ok_or_else(|| Error::not_found(EntityKind::Creator, creator_id))?
            .creator_mut()?
            .upload_video(video_id.clone());

        info!(video = %video_id, creator = creator_id, "Uploaded video");
        self.video(&video_id)
    }

    pub fn video(&self, id: &str) -> Result<&Video> {
        self.store
            .video(id)
            .ok_or_else(|| Error::not_found(EntityKind::Video, id))
    }

    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.store.videos()
    }

    /// Creator that uploaded the video, if it still exists.
    pub fn video_owner(&self, video_id: &str) -> Option<&User> {
        self.store
            .users()
            .find(|u| u.as_creator().is_some_and(|c| c.owns(video_id)))
    }

    /// Remove a video, its comments, its stored analysis, the analyzer's
    /// recorded sentiments for those comments and its entry in the creator's
    /// uploads.
    pub fn delete_video(&mut self, id: &str) -> Result<Video> {
        let video = self
            .store
            .remove_video(id)
            .ok_or_else(|| Error::not_found(EntityKind::Video, id))?;
        self.disown_video(id);
        self.store.remove_result(id);
        self.analyzer.forget(video.comments().iter().map(Comment::id));
        info!(video = %id, comments = video.comment_count(), "Deleted video");
        Ok(video)
    }

    fn disown_video(&mut self, video_id: &str) {
        let owners: Vec<String> = self
            .store
            .users()
            .filter(|u| u.as_creator().is_some_and(|c| c.owns(video_id)))
            .map(|u| u.id().to_string())
            .collect();
        for owner in owners {
            if let Some(profile) = self
                .store
                .user_mut(&owner)
                .and_then(|u| u.creator_mut().ok())
            {
                profile.delete_video(video_id);
            }
        }
    }

    /// Viewer watches a video: one view on the video, one history entry.
    pub fn watch_video(&mut self, viewer_id: &str, video_id: &str) -> Result<()> {
        self.video(video_id)?;
        self.store
            .user_mut(viewer_id)
            .ok_or_else(|| Error::not_found(EntityKind::Viewer, viewer_id))?
            .viewer_mut()?
            .add_to_watch_history(video_id);
        if let Some(video) = self.store.video_mut(video_id) {
            video.add_view();
        }
        debug!(viewer = viewer_id, video = video_id, "Recorded watch");
        Ok(())
    }

    pub fn add_favorite_category(&mut self, viewer_id: &str, category: &str) -> Result<bool> {
        let added = self
            .store
            .user_mut(viewer_id)
            .ok_or_else(|| Error::not_found(EntityKind::Viewer, viewer_id))?
            .viewer_mut()?
            .add_favorite_category(category);
        Ok(added)
    }

    // ----- comments -----

    pub fn create_comment(
        &mut self,
        video_id: &str,
        author_id: &str,
        comment_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<&Comment> {
        self.video(video_id)?;
        self.user(author_id)?;

        let comment = Comment::new(comment_id, content, author_id);
        let comment_id = comment.id().to_string();
        self.store.insert_comment(video_id, comment)?;
        info!(comment = %comment_id, video = video_id, author = author_id, "Added comment");
        self.comment(&comment_id)
    }

    pub fn comment(&self, id: &str) -> Result<&Comment> {
        self.store
            .comment(id)
            .ok_or_else(|| Error::not_found(EntityKind::Comment, id))
    }

    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.store.comments()
    }

    /// Username of the comment's author, `None` once the author is gone.
    pub fn author_name(&self, comment: &Comment) -> Option<&str> {
        comment
            .author_id()
            .and_then(|id| self.store.user(id))
            .map(User::username)
    }

    pub fn react_to_comment(&mut self, comment_id: &str, reaction: Reaction) -> Result<&Comment> {
        let comment = self
            .store
            .comment_mut(comment_id)
            .ok_or_else(|| Error::not_found(EntityKind::Comment, comment_id))?;
        match reaction {
            Reaction::Like => comment.add_like(),
            Reaction::Dislike => comment.add_dislike(),
        }
        self.comment(comment_id)
    }

    // ----- analysis -----

    /// Analyze a video's comments and keep the result under the video id.
    ///
    /// A video without comments is rejected with `EmptyInput` before the
    /// analyzer runs, and no result is stored.
    pub fn analyze_video(&mut self, video_id: &str) -> Result<&AnalysisResult> {
        let video = self
            .store
            .video(video_id)
            .ok_or_else(|| Error::not_found(EntityKind::Video, video_id))?;
        if video.comments().is_empty() {
            return Err(Error::empty_input(video_id));
        }

        let result = self.analyzer.analyze_comments(video.comments());
        info!(
            video = video_id,
            comments = result.total_comments_analyzed(),
            score = result.quality_score().value(),
            "Analyzed video"
        );
        self.store.store_result(video_id, result);
        self.analysis_result(video_id)
    }

    /// Last stored analysis of a video. May be stale if comments changed.
    pub fn analysis_result(&self, video_id: &str) -> Result<&AnalysisResult> {
        self.store
            .result(video_id)
            .ok_or_else(|| Error::not_found(EntityKind::AnalysisResult, video_id))
    }

    /// One-line analysis report for a video with comments.
    pub fn report(&mut self, video_id: &str) -> Result<String> {
        let video = self
            .store
            .video(video_id)
            .ok_or_else(|| Error::not_found(EntityKind::Video, video_id))?;
        if video.comments().is_empty() {
            return Err(Error::empty_input(video_id));
        }
        Ok(self.analyzer.generate_report(video))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Recommendation;

    fn new_video(id: &str) -> NewVideo {
        NewVideo {
            id: id.to_string(),
            title: format!("Title {id}"),
            url: format!("http://example.com/{id}"),
            duration_secs: 90,
            category: "Education".to_string(),
        }
    }

    fn seeded() -> Platform {
        let mut platform = Platform::default();
        platform
            .create_user(UserKind::Creator, "u1", "alice", "alice@example.com")
            .unwrap();
        platform
            .create_user(UserKind::Viewer, "u2", "bob", "bob@example.com")
            .unwrap();
        platform.create_video("u1", new_video("v1")).unwrap();
        platform
    }

    fn total_videos(platform: &Platform, creator: &str) -> usize {
        platform
            .creator(creator)
            .unwrap()
            .as_creator()
            .unwrap()
            .total_videos()
    }

    #[test]
    fn upload_then_delete_adjusts_creator_total() {
        let mut platform = seeded();
        for i in 2..=4 {
            platform.create_video("u1", new_video(&format!("v{i}"))).unwrap();
        }
        assert_eq!(total_videos(&platform, "u1"), 4);

        platform.delete_video("v3").unwrap();
        assert_eq!(total_videos(&platform, "u1"), 3);
        assert!(platform.video("v3").is_err());
    }

    #[test]
    fn video_needs_a_creator() {
        let mut platform = seeded();
        let err = platform.create_video("u2", new_video("v9")).unwrap_err();
        assert!(matches!(err, Error::RoleMismatch { .. }));
        let err = platform.create_video("nobody", new_video("v9")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert!(platform.video("v9").is_err());
    }

    #[test]
    fn reuploading_same_id_keeps_single_owner_entry() {
        let mut platform = seeded();
        platform.create_video("u1", new_video("v1")).unwrap();
        assert_eq!(total_videos(&platform, "u1"), 1);
        assert_eq!(platform.videos().count(), 1);
    }

    #[test]
    fn comment_validates_video_and_author() {
        let mut platform = seeded();
        let err = platform.create_comment("nope", "u2", "c1", "hi").unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: EntityKind::Video, .. }));
        let err = platform.create_comment("v1", "ghost", "c1", "hi").unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: EntityKind::User, .. }));
        assert_eq!(platform.comments().count(), 0);

        platform.create_comment("v1", "u2", "c1", "great video").unwrap();
        assert_eq!(platform.video("v1").unwrap().comment_count(), 1);
        assert_eq!(
            platform.author_name(platform.comment("c1").unwrap()),
            Some("bob")
        );
    }

    #[test]
    fn analysis_of_empty_video_is_rejected_without_result() {
        let mut platform = seeded();
        let err = platform.analyze_video("v1").unwrap_err();
        assert!(matches!(err, Error::EmptyInput { .. }));
        assert!(platform.analysis_result("v1").is_err());
        assert!(platform.analyzer().recorded_sentiment("c1").is_none());
    }

    #[test]
    fn analysis_scenario_scores_mixed() {
        let mut platform = seeded();
        platform.create_comment("v1", "u2", "c1", "great video").unwrap();
        platform.create_comment("v1", "u2", "c2", "terrible content").unwrap();
        platform.create_comment("v1", "u1", "c3", "okay I guess").unwrap();

        let result = platform.analyze_video("v1").unwrap().clone();
        assert_eq!(result.quality_score().value(), 5.0);
        assert_eq!(result.total_comments_analyzed(), 3);
        assert_eq!(result.recommendation(), Recommendation::Mixed);
        assert_eq!(platform.analysis_result("v1").unwrap(), &result);
    }

    #[test]
    fn stored_result_goes_stale_until_reanalyzed() {
        let mut platform = seeded();
        platform.create_comment("v1", "u2", "c1", "awful").unwrap();
        let before = platform.analyze_video("v1").unwrap().quality_score();

        platform.create_comment("v1", "u2", "c2", "awesome").unwrap();
        assert_eq!(platform.analysis_result("v1").unwrap().quality_score(), before);

        let after = platform.analyze_video("v1").unwrap().quality_score();
        assert_eq!(after.value(), 5.0);
    }

    #[test]
    fn watch_requires_viewer_and_is_atomic() {
        let mut platform = seeded();
        let err = platform.watch_video("u1", "v1").unwrap_err();
        assert!(matches!(err, Error::RoleMismatch { .. }));
        assert_eq!(platform.video("v1").unwrap().view_count(), 0);

        let err = platform.watch_video("u2", "missing").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));

        platform.watch_video("u2", "v1").unwrap();
        platform.watch_video("u2", "v1").unwrap();
        assert_eq!(platform.video("v1").unwrap().view_count(), 2);
        let bob = platform.user("u2").unwrap().as_viewer().unwrap();
        assert_eq!(bob.watch_history(), ["v1", "v1"]);
    }

    #[test]
    fn deleting_author_nulls_comment_reference() {
        let mut platform = seeded();
        platform.create_comment("v1", "u2", "c1", "great").unwrap();
        platform.delete_user("u2").unwrap();

        let comment = platform.comment("c1").unwrap();
        assert_eq!(comment.author_id(), None);
        assert_eq!(platform.author_name(comment), None);
        assert_eq!(platform.video("v1").unwrap().comment_count(), 1);
    }

    #[test]
    fn deleting_creator_leaves_videos() {
        let mut platform = seeded();
        platform.delete_user("u1").unwrap();
        assert!(platform.video("v1").is_ok());
        assert!(platform.video_owner("v1").is_none());
    }

    #[test]
    fn deleting_video_discards_comments_and_result() {
        let mut platform = seeded();
        platform.create_comment("v1", "u2", "c1", "great").unwrap();
        platform.analyze_video("v1").unwrap();

        platform.delete_video("v1").unwrap();
        assert!(platform.comment("c1").is_err());
        assert!(platform.analysis_result("v1").is_err());
        assert!(platform.analyzer().recorded_sentiment("c1").is_none());
        assert_eq!(total_videos(&platform, "u1"), 0);
    }

    #[test]
    fn reactions_update_counters() {
        let mut platform = seeded();
        platform.create_comment("v1", "u2", "c1", "nice").unwrap();
        platform.react_to_comment("c1", Reaction::Like).unwrap();
        let comment = platform.react_to_comment("c1", Reaction::Dislike).unwrap();
        assert_eq!((comment.likes(), comment.dislikes()), (1, 1));
        assert!(platform.react_to_comment("c9", Reaction::Like).is_err());
    }

    #[test]
    fn report_uses_video_title() {
        let mut platform = seeded();
        platform.create_comment("v1", "u2", "c1", "best ever").unwrap();
        assert_eq!(
            platform.report("v1").unwrap(),
            "Analysis Report for 'Title v1': Score 10.00/10"
        );
    }

    #[test]
    fn profile_update_and_favorites() {
        let mut platform = seeded();
        platform
            .update_profile("u2", Some("robert".into()), None)
            .unwrap();
        assert_eq!(platform.user("u2").unwrap().username(), "robert");
        assert!(platform.add_favorite_category("u2", "Music").unwrap());
        assert!(!platform.add_favorite_category("u2", "Music").unwrap());
        assert!(platform.add_favorite_category("u1", "Music").is_err());
    }
}
