use std::sync::Arc;

use uuid::Uuid;

use crate::domain::rating::ports::RatingRepository;
use crate::domain::song::errors::SongError;
use crate::domain::song::models::Song;
use crate::domain::song::models::SongFields;
use crate::domain::song::models::SongRating;
use crate::domain::song::ports::SongRepository;

/// Song catalog operations, including the rate-a-song write path.
pub struct SongService<SR, RR>
where
    SR: SongRepository,
    RR: RatingRepository,
{
    songs: Arc<SR>,
    ratings: Arc<RR>,
}

impl<SR, RR> SongService<SR, RR>
where
    SR: SongRepository,
    RR: RatingRepository,
{
    pub fn new(songs: Arc<SR>, ratings: Arc<RR>) -> Self {
        Self { songs, ratings }
    }

    pub async fn create_song(&self, fields: SongFields) -> Result<Song, SongError> {
        let song = Song {
            id: Uuid::new_v4(),
            title: fields.title,
            artist: fields.artist,
            album: fields.album,
            file_path: fields.file_path,
        };

        self.songs.create(song).await.map_err(|e| {
            tracing::error!(error = %e, "Song insert failed");
            SongError::CreateFailed
        })
    }

    /// # Errors
    /// * `NoSongs` - the catalog is empty
    pub async fn get_all_songs(&self) -> Result<Vec<Song>, SongError> {
        let songs = self.songs.find_all().await.map_err(|e| {
            tracing::error!(error = %e, "Song listing failed");
            SongError::FetchFailed
        })?;

        if songs.is_empty() {
            return Err(SongError::NoSongs);
        }

        Ok(songs)
    }

    pub async fn get_song_by_id(&self, id: Uuid) -> Result<Song, SongError> {
        self.songs
            .find_by_id(id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Song lookup failed");
                SongError::FetchByIdFailed
            })?
            .ok_or(SongError::NotFound)
    }

    pub async fn update_song(&self, id: Uuid, fields: SongFields) -> Result<Song, SongError> {
        let song = Song {
            id,
            title: fields.title,
            artist: fields.artist,
            album: fields.album,
            file_path: fields.file_path,
        };

        self.songs
            .update(song)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Song update failed");
                SongError::UpdateFailed
            })?
            .ok_or(SongError::NotFound)
    }

    pub async fn delete_song(&self, id: Uuid) -> Result<(), SongError> {
        let deleted = self.songs.delete(id).await.map_err(|e| {
            tracing::error!(error = %e, "Song delete failed");
            SongError::DeleteFailed
        })?;

        if !deleted {
            return Err(SongError::NotFound);
        }

        Ok(())
    }

    /// Upsert the caller's rating for a song; the previous value, if any,
    /// is overwritten.
    pub async fn rate_song(
        &self,
        user_id: Uuid,
        song_id: Uuid,
        rating: i32,
    ) -> Result<SongRating, SongError> {
        self.ratings
            .upsert(SongRating {
                user_id,
                song_id,
                rating,
            })
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Rating upsert failed");
                SongError::RateFailed
            })
    }
}
