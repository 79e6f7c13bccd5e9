use thiserror::Error;

/// Domain failures for song operations. `Display` strings are
/// wire-visible.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SongError {
    #[error("No songs found")]
    NoSongs,

    #[error("Song not found")]
    NotFound,

    #[error("Error creating song")]
    CreateFailed,

    #[error("Error fetching songs")]
    FetchFailed,

    #[error("Error fetching song by ID")]
    FetchByIdFailed,

    #[error("Internal server error while updating song")]
    UpdateFailed,

    #[error("Error deleting song")]
    DeleteFailed,

    #[error("Error rating song")]
    RateFailed,
}
