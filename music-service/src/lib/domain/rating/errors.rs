use thiserror::Error;
use uuid::Uuid;

/// Domain failures for rating queries. `Display` strings are
/// wire-visible.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("No ratings found")]
    NoRatings,

    #[error("No ratings found for user with ID {0}")]
    NoneForUser(Uuid),

    #[error("No ratings found for song with ID {0}")]
    NoneForSong(Uuid),

    #[error("No rating found for user ID {0} and song ID {1}")]
    NoneForPair(Uuid, Uuid),

    #[error("Internal server error")]
    Internal,
}
