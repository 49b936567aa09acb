use std::str::FromStr;

use crate::core::{Error, UserKind};
use crate::platform::Reaction;

/// Commands of the main menu, keyed by the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateUser,
    CreateVideo,
    CreateComment,
    AnalyzeVideo,
    ListUsers,
    ListVideos,
    ListComments,
    SearchUser,
    SearchVideo,
    DeleteUser,
    DeleteVideo,
    VideoDetails,
    WatchVideo,
    ReactToComment,
    AddFavoriteCategory,
    SaveResult,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 17] = [
        Self::CreateUser,
        Self::CreateVideo,
        Self::CreateComment,
        Self::AnalyzeVideo,
        Self::ListUsers,
        Self::ListVideos,
        Self::ListComments,
        Self::SearchUser,
        Self::SearchVideo,
        Self::DeleteUser,
        Self::DeleteVideo,
        Self::VideoDetails,
        Self::WatchVideo,
        Self::ReactToComment,
        Self::AddFavoriteCategory,
        Self::SaveResult,
        Self::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::Exit => 0,
            other => Self::ALL
                .iter()
                .position(|c| *c == other)
                .map_or(0, |i| i as u8 + 1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CreateUser => "Create User/Creator/Viewer",
            Self::CreateVideo => "Create Video",
            Self::CreateComment => "Create Comment",
            Self::AnalyzeVideo => "Analyze Video",
            Self::ListUsers => "List All Users",
            Self::ListVideos => "List All Videos",
            Self::ListComments => "List All Comments",
            Self::SearchUser => "Search User by ID",
            Self::SearchVideo => "Search Video by ID",
            Self::DeleteUser => "Delete User",
            Self::DeleteVideo => "Delete Video",
            Self::VideoDetails => "Display Video Details",
            Self::WatchVideo => "Watch Video",
            Self::ReactToComment => "Like/Dislike Comment",
            Self::AddFavoriteCategory => "Add Favorite Category",
            Self::SaveResult => "Save Analysis Result",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: u8 = trimmed
            .parse()
            .map_err(|_| Error::InvalidSelection(trimmed.to_string()))?;
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| Error::InvalidSelection(trimmed.to_string()))
    }
}

/// Parse the answer to "Select user type".
pub fn parse_user_kind(s: &str) -> Result<UserKind, Error> {
    match s.trim() {
        "1" => Ok(UserKind::Plain),
        "2" => Ok(UserKind::Creator),
        "3" => Ok(UserKind::Viewer),
        other => Err(Error::InvalidSelection(other.to_string())),
    }
}

pub fn parse_reaction(s: &str) -> Result<Reaction, Error> {
    match s.trim() {
        "1" => Ok(Reaction::Like),
        "2" => Ok(Reaction::Dislike),
        other => Err(Error::InvalidSelection(other.to_string())),
    }
}
