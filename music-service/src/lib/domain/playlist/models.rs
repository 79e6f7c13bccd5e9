use uuid::Uuid;

use crate::domain::song::models::Song;

/// A user-owned playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub genre: String,
}

/// A playlist together with the songs currently on it.
#[derive(Debug, Clone)]
pub struct PlaylistWithSongs {
    pub playlist: Playlist,
    pub songs: Vec<Song>,
}

/// Membership of a song on a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSong {
    pub id: Uuid,
    pub playlist_id: Uuid,
    pub song_id: Uuid,
}

/// Command to create a playlist for a user.
#[derive(Debug, Clone)]
pub struct CreatePlaylistCommand {
    pub name: String,
    pub genre: String,
}
