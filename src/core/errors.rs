//! Shared error types for the application

use std::fmt;
use thiserror::Error;

/// Kind of entity a lookup was performed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Creator,
    Viewer,
    Video,
    Comment,
    AnalysisResult,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "User",
            Self::Creator => "Creator",
            Self::Viewer => "Viewer",
            Self::Video => "Video",
            Self::Comment => "Comment",
            Self::AnalysisResult => "Analysis result",
        };
        f.write_str(name)
    }
}

/// Main error type for vidalyzer operations
///
/// None of these are fatal for an interactive session: the menu loop renders
/// the message and returns to its prompt.
#[derive(Debug, Error)]
pub enum Error {
    /// Lookup by id failed
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Analysis requested on a video without comments
    #[error("Video {video_id} has no comments to analyze")]
    EmptyInput { video_id: String },

    /// Unrecognized menu or user-type choice
    #[error("Invalid choice: {0:?}")]
    InvalidSelection(String),

    /// A field value could not be parsed or is out of range
    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// Operation needs a user with a specific role
    #[error("User {id} is not a {expected}")]
    RoleMismatch { id: String, expected: EntityKind },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn empty_input(video_id: impl Into<String>) -> Self {
        Self::EmptyInput {
            video_id: video_id.into(),
        }
    }

    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn role_mismatch(id: impl Into<String>, expected: EntityKind) -> Self {
        Self::RoleMismatch {
            id: id.into(),
            expected,
        }
    }

    /// Stable code for documentation lookup and scripted checks.
    ///
    /// - E001-E009: lookup and input errors
    /// - E020-E029: configuration errors
    /// - E090: I/O
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "E001",
            Self::EmptyInput { .. } => "E002",
            Self::InvalidSelection(_) => "E003",
            Self::InvalidInput { .. } => "E004",
            Self::RoleMismatch { .. } => "E005",
            Self::Configuration(_) => "E020",
            Self::Toml(_) => "E021",
            Self::Io(_) => "E090",
        }
    }

    /// Whether the session can continue after reporting this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
