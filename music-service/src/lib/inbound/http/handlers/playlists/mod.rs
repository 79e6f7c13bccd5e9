use serde::Serialize;
use uuid::Uuid;

use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistSong;
use crate::domain::playlist::models::PlaylistWithSongs;
use crate::inbound::http::handlers::songs::SongResponseData;

pub mod add_song_to_playlist;
pub mod create_playlist;
pub mod get_user_playlists;
pub mod remove_song_from_playlist;
pub mod search_playlists;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistResponseData {
    pub id: Uuid,
    pub name: String,
    pub genre: String,
    pub user_id: Uuid,
}

impl From<&Playlist> for PlaylistResponseData {
    fn from(playlist: &Playlist) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name.clone(),
            genre: playlist.genre.clone(),
            user_id: playlist.user_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistWithSongsResponseData {
    pub id: Uuid,
    pub name: String,
    pub genre: String,
    pub user_id: Uuid,
    pub songs: Vec<SongResponseData>,
}

impl From<&PlaylistWithSongs> for PlaylistWithSongsResponseData {
    fn from(entry: &PlaylistWithSongs) -> Self {
        Self {
            id: entry.playlist.id,
            name: entry.playlist.name.clone(),
            genre: entry.playlist.genre.clone(),
            user_id: entry.playlist.user_id,
            songs: entry.songs.iter().map(SongResponseData::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSongResponseData {
    pub id: Uuid,
    pub playlist_id: Uuid,
    pub song_id: Uuid,
}

impl From<&PlaylistSong> for PlaylistSongResponseData {
    fn from(entry: &PlaylistSong) -> Self {
        Self {
            id: entry.id,
            playlist_id: entry.playlist_id,
            song_id: entry.song_id,
        }
    }
}
