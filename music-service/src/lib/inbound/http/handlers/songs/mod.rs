use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::song::models::Song;
use crate::domain::song::models::SongFields;
use crate::domain::song::models::SongRating;

pub mod create_song;
pub mod delete_song;
pub mod get_all_songs;
pub mod get_song;
pub mod rate_song;
pub mod update_song;

/// Request body shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRequest {
    title: String,
    artist: String,
    album: Option<String>,
    file_path: String,
}

impl From<SongRequest> for SongFields {
    fn from(body: SongRequest) -> Self {
        Self {
            title: body.title,
            artist: body.artist,
            album: body.album,
            file_path: body.file_path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongResponseData {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub file_path: String,
}

impl From<&Song> for SongResponseData {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id,
            title: song.title.clone(),
            artist: song.artist.clone(),
            album: song.album.clone(),
            file_path: song.file_path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRatingResponseData {
    pub user_id: Uuid,
    pub song_id: Uuid,
    pub rating: i32,
}

impl From<&SongRating> for SongRatingResponseData {
    fn from(rating: &SongRating) -> Self {
        Self {
            user_id: rating.user_id,
            song_id: rating.song_id,
            rating: rating.rating,
        }
    }
}
