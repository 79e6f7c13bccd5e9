use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistSong;
use crate::domain::playlist::models::PlaylistWithSongs;

/// Persistence operations for playlists and playlist membership.
#[async_trait]
pub trait PlaylistRepository: Send + Sync + 'static {
    async fn create(&self, playlist: Playlist) -> Result<Playlist, StoreError>;

    /// All playlists owned by the user, each with its songs.
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<PlaylistWithSongs>, StoreError>;

    async fn add_song(&self, entry: PlaylistSong) -> Result<PlaylistSong, StoreError>;

    /// Removes every membership row matching the pair; removing an absent
    /// pair is not an error.
    async fn remove_song(&self, playlist_id: Uuid, song_id: Uuid) -> Result<(), StoreError>;

    /// Case-insensitive substring search on name and/or genre. `None`
    /// filters match everything.
    async fn search<'a>(
        &self,
        name: Option<&'a str>,
        genre: Option<&'a str>,
    ) -> Result<Vec<Playlist>, StoreError>;
}
