use indexmap::IndexMap;

use crate::analysis::AnalysisResult;
use crate::core::{Comment, EntityKind, EntityStore, Error, Result, User, Video};

/// Session-scoped store backed by insertion-ordered maps.
///
/// Comments are owned by their video. `comment_index` maps every comment id
/// to the id of the video that holds it, in posting order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: IndexMap<String, User>,
    videos: IndexMap<String, Video>,
    comment_index: IndexMap<String, String>,
    results: IndexMap<String, AnalysisResult>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn unindex_comments(&mut self, video: &Video) {
        for comment in video.comments() {
            if self.comment_index.get(comment.id()).map(String::as_str) == Some(video.id()) {
                self.comment_index.shift_remove(comment.id());
            }
        }
    }
}

impl EntityStore for InMemoryStore {
    fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.get_mut(id)
    }

    fn insert_user(&mut self, user: User) -> Option<User> {
        self.users.insert(user.id().to_string(), user)
    }

    fn remove_user(&mut self, id: &str) -> Option<User> {
        self.users.shift_remove(id)
    }

    fn users(&self) -> Box<dyn Iterator<Item = &User> + '_> {
        Box::new(self.users.values())
    }

    fn video(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    fn video_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.get_mut(id)
    }

    fn insert_video(&mut self, video: Video) -> Option<Video> {
        let id = video.id().to_string();
        let new_comment_ids: Vec<String> =
            video.comments().iter().map(|c| c.id().to_string()).collect();

        let previous = self.videos.insert(id.clone(), video);
        if let Some(old) = &previous {
            self.unindex_comments(old);
        }
        for comment_id in new_comment_ids {
            self.comment_index.insert(comment_id, id.clone());
        }
        previous
    }

    fn remove_video(&mut self, id: &str) -> Option<Video> {
        let video = self.videos.shift_remove(id)?;
        self.unindex_comments(&video);
        Some(video)
    }

    fn videos(&self) -> Box<dyn Iterator<Item = &Video> + '_> {
        Box::new(self.videos.values())
    }

    fn videos_mut(&mut self) -> Box<dyn Iterator<Item = &mut Video> + '_> {
        Box::new(self.videos.values_mut())
    }

    fn comment(&self, id: &str) -> Option<&Comment> {
        let video_id = self.comment_index.get(id)?;
        self.videos.get(video_id)?.comment(id)
    }

    fn comment_mut(&mut self, id: &str) -> Option<&mut Comment> {
        let video_id = self.comment_index.get(id)?;
        self.videos.get_mut(video_id)?.comment_mut(id)
    }

    fn comment_video_id(&self, comment_id: &str) -> Option<&str> {
        self.comment_index.get(comment_id).map(String::as_str)
    }

    fn insert_comment(&mut self, video_id: &str, comment: Comment) -> Result<()> {
        if !self.videos.contains_key(video_id) {
            return Err(Error::not_found(EntityKind::Video, video_id));
        }

        // Same id posted again replaces the earlier comment wherever it lives.
        if let Some(previous_video) = self.comment_index.shift_remove(comment.id()) {
            if let Some(video) = self.videos.get_mut(&previous_video) {
                video.remove_comment(comment.id());
            }
        }

        self.comment_index
            .insert(comment.id().to_string(), video_id.to_string());
        if let Some(video) = self.videos.get_mut(video_id) {
            video.add_comment(comment);
        }
        Ok(())
    }

    fn comments(&self) -> Box<dyn Iterator<Item = &Comment> + '_> {
        Box::new(
            self.comment_index
                .iter()
                .filter_map(|(comment_id, video_id)| self.videos.get(video_id)?.comment(comment_id)),
        )
    }

    fn store_result(&mut self, video_id: &str, result: AnalysisResult) -> Option<AnalysisResult> {
        self.results.insert(video_id.to_string(), result)
    }

    fn result(&self, video_id: &str) -> Option<&AnalysisResult> {
        self.results.get(video_id)
    }

    fn remove_result(&mut self, video_id: &str) -> Option<AnalysisResult> {
        self.results.shift_remove(video_id)
    }
}
