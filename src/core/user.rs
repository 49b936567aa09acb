//! Users and their role-specific profiles.
//!
//! A user is one record with an explicit role tag. Role-specific data
//! (a creator's uploads, a viewer's history) only exists on the matching
//! variant, so there is no way to ask a plain user for its subscriber count.

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::errors::{EntityKind, Error, Result};

/// Which kind of account to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Plain,
    Creator,
    Viewer,
}

impl UserKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Plain => "User",
            Self::Creator => "Video Creator",
            Self::Viewer => "Viewer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: String,
    username: String,
    email: String,
    registered_at: DateTime<Utc>,
    role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Plain,
    Creator(CreatorProfile),
    Viewer(ViewerProfile),
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_kind(UserKind::Plain, id, username, email)
    }

    pub fn creator(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self::with_kind(UserKind::Creator, id, username, email)
    }

    pub fn viewer(id: impl Into<String>, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_kind(UserKind::Viewer, id, username, email)
    }

    pub fn with_kind(
        kind: UserKind,
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let role = match kind {
            UserKind::Plain => UserRole::Plain,
            UserKind::Creator => UserRole::Creator(CreatorProfile::default()),
            UserKind::Viewer => UserRole::Viewer(ViewerProfile::default()),
        };
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            registered_at: Utc::now(),
            role,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn role(&self) -> &UserRole {
        &self.role
    }

    pub fn kind(&self) -> UserKind {
        match self.role {
            UserRole::Plain => UserKind::Plain,
            UserRole::Creator(_) => UserKind::Creator,
            UserRole::Viewer(_) => UserKind::Viewer,
        }
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn as_creator(&self) -> Option<&CreatorProfile> {
        match &self.role {
            UserRole::Creator(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn as_viewer(&self) -> Option<&ViewerProfile> {
        match &self.role {
            UserRole::Viewer(profile) => Some(profile),
            _ => None,
        }
    }

    /// Creator profile, or `RoleMismatch` for any other role.
    pub fn creator_mut(&mut self) -> Result<&mut CreatorProfile> {
        match &mut self.role {
            UserRole::Creator(profile) => Ok(profile),
            _ => Err(Error::role_mismatch(&self.id, EntityKind::Creator)),
        }
    }

    /// Viewer profile, or `RoleMismatch` for any other role.
    pub fn viewer_mut(&mut self) -> Result<&mut ViewerProfile> {
        match &mut self.role {
            UserRole::Viewer(profile) => Ok(profile),
            _ => Err(Error::role_mismatch(&self.id, EntityKind::Viewer)),
        }
    }
}

/// Uploads and channel stats of a creator.
///
/// The video total is always the length of the upload list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorProfile {
    subscriber_count: u64,
    verified: bool,
    videos: Vec<String>,
}

impl CreatorProfile {
    pub fn subscriber_count(&self) -> u64 {
        self.subscriber_count
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn set_verified(&mut self, verified: bool) {
        self.verified = verified;
    }

    pub fn add_subscriber(&mut self) {
        self.subscriber_count += 1;
    }

    /// Ids of uploaded videos, oldest first.
    pub fn videos(&self) -> &[String] {
        &self.videos
    }

    pub fn total_videos(&self) -> usize {
        self.videos.len()
    }

    pub fn owns(&self, video_id: &str) -> bool {
        self.videos.iter().any(|id| id == video_id)
    }

    pub fn upload_video(&mut self, video_id: impl Into<String>) {
        self.videos.push(video_id.into());
    }

    /// Returns false when the creator never uploaded `video_id`.
    pub fn delete_video(&mut self, video_id: &str) -> bool {
        let before = self.videos.len();
        self.videos.retain(|id| id != video_id);
        self.videos.len() != before
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerProfile {
    watch_history: Vec<String>,
    favorite_categories: IndexSet<String>,
}

impl ViewerProfile {
    pub fn watch_history(&self) -> &[String] {
        &self.watch_history
    }

    pub fn add_to_watch_history(&mut self, video_id: impl Into<String>) {
        self.watch_history.push(video_id.into());
    }

    pub fn favorite_categories(&self) -> impl Iterator<Item = &str> {
        self.favorite_categories.iter().map(String::as_str)
    }

    /// Returns false if the category was already a favourite.
    pub fn add_favorite_category(&mut self, category: impl Into<String>) -> bool {
        self.favorite_categories.insert(category.into())
    }
}
