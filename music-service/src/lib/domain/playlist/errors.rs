use thiserror::Error;

/// Domain failures for playlist operations. `Display` strings are
/// wire-visible.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("No playlists found")]
    NoPlaylists,

    #[error("Song not found")]
    SongNotFound,

    #[error("Error creating playlist")]
    CreateFailed,

    #[error("Error fetching playlists")]
    FetchFailed,

    #[error("Error adding song to playlist")]
    AddSongFailed,

    #[error("Error removing song from playlist")]
    RemoveSongFailed,

    #[error("Error searching playlists")]
    SearchFailed,
}
