use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::rating::models::RatingDetail;
use crate::domain::song::models::SongRating;

/// Persistence operations for song ratings.
///
/// Writes go through `upsert`; reads return ratings joined with user and
/// song references.
#[async_trait]
pub trait RatingRepository: Send + Sync + 'static {
    /// Insert the rating, or overwrite an existing one for the same
    /// `(user_id, song_id)` pair.
    async fn upsert(&self, rating: SongRating) -> Result<SongRating, StoreError>;

    async fn find_all(&self) -> Result<Vec<RatingDetail>, StoreError>;

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<RatingDetail>, StoreError>;

    async fn find_by_song(&self, song_id: Uuid) -> Result<Vec<RatingDetail>, StoreError>;

    async fn find_by_user_and_song(
        &self,
        user_id: Uuid,
        song_id: Uuid,
    ) -> Result<Option<RatingDetail>, StoreError>;
}
