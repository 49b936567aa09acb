pub mod comment;
pub mod errors;
pub mod traits;
pub mod user;
pub mod video;

pub use comment::Comment;
pub use errors::{EntityKind, Error, Result};
pub use traits::{EntityStore, SentimentScorer};
pub use user::{CreatorProfile, User, UserKind, UserRole, ViewerProfile};
pub use video::Video;
