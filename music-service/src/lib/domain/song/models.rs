use uuid::Uuid;

/// A song in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub file_path: String,
}

/// A user's rating of a song. One row per `(user_id, song_id)`; rating a
/// song twice overwrites the previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongRating {
    pub user_id: Uuid,
    pub song_id: Uuid,
    pub rating: i32,
}

/// Command carrying the writable fields of a song, used for both create
/// and full update.
#[derive(Debug, Clone)]
pub struct SongFields {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub file_path: String,
}
