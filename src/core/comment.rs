use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a video.
///
/// The author is referenced by id only. It becomes `None` once the author
/// account is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: String,
    content: String,
    author_id: Option<String>,
    likes: u64,
    dislikes: u64,
    posted_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            author_id: Some(author_id.into()),
            likes: 0,
            dislikes: 0,
            posted_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author_id(&self) -> Option<&str> {
        self.author_id.as_deref()
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn dislikes(&self) -> u64 {
        self.dislikes
    }

    pub fn posted_at(&self) -> DateTime<Utc> {
        self.posted_at
    }

    pub fn add_like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }

    pub fn add_dislike(&mut self) {
        self.dislikes = self.dislikes.saturating_add(1);
    }

    /// Drop the author reference. Returns true if it pointed at `author_id`.
    pub fn detach_author(&mut self, author_id: &str) -> bool {
        if self.author_id.as_deref() == Some(author_id) {
            self.author_id = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reactions_are_counted_separately() {
        let mut comment = Comment::new("c1", "nice", "u1");
        comment.add_like();
        comment.add_like();
        comment.add_dislike();
        assert_eq!(comment.likes(), 2);
        assert_eq!(comment.dislikes(), 1);
    }

    #[test]
    fn detach_only_matching_author() {
        let mut comment = Comment::new("c1", "nice", "u1");
        assert!(!comment.detach_author("u9"));
        assert_eq!(comment.author_id(), Some("u1"));
        assert!(comment.detach_author("u1"));
        assert_eq!(comment.author_id(), None);
    }
}
