use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comment::Comment;

/// An uploaded video together with the comments posted on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    id: String,
    title: String,
    url: String,
    duration_secs: u32,
    view_count: u64,
    category: String,
    uploaded_at: DateTime<Utc>,
    comments: Vec<Comment>,
}

impl Video {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        duration_secs: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            duration_secs,
            view_count: 0,
            category: category.into(),
            uploaded_at: Utc::now(),
            comments: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn view_count(&self) -> u64 {
        self.view_count
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    /// One watch event.
    pub fn add_view(&mut self) {
        self.view_count = self.view_count.saturating_add(1);
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id() == comment_id)
    }

    pub fn comment_mut(&mut self, comment_id: &str) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id() == comment_id)
    }

    pub(crate) fn comments_mut(&mut self) -> impl Iterator<Item = &mut Comment> {
        self.comments.iter_mut()
    }

    pub fn remove_comment(&mut self, comment_id: &str) -> Option<Comment> {
        let index = self.comments.iter().position(|c| c.id() == comment_id)?;
        Some(self.comments.remove(index))
    }
}
