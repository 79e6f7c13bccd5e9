use std::sync::Arc;

use uuid::Uuid;

use crate::domain::rating::errors::RatingError;
use crate::domain::rating::models::RatingDetail;
use crate::domain::rating::ports::RatingRepository;

/// Read-side queries over song ratings.
pub struct RatingService<RR>
where
    RR: RatingRepository,
{
    ratings: Arc<RR>,
}

impl<RR> RatingService<RR>
where
    RR: RatingRepository,
{
    pub fn new(ratings: Arc<RR>) -> Self {
        Self { ratings }
    }

    pub async fn get_all_ratings(&self) -> Result<Vec<RatingDetail>, RatingError> {
        let ratings = self.ratings.find_all().await.map_err(|e| {
            tracing::error!(error = %e, "Rating listing failed");
            RatingError::Internal
        })?;

        if ratings.is_empty() {
            return Err(RatingError::NoRatings);
        }

        Ok(ratings)
    }

    pub async fn get_ratings_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<RatingDetail>, RatingError> {
        let ratings = self.ratings.find_by_user(user_id).await.map_err(|e| {
            tracing::error!(error = %e, "Rating lookup by user failed");
            RatingError::Internal
        })?;

        if ratings.is_empty() {
            return Err(RatingError::NoneForUser(user_id));
        }

        Ok(ratings)
    }

    pub async fn get_ratings_by_song(
        &self,
        song_id: Uuid,
    ) -> Result<Vec<RatingDetail>, RatingError> {
        let ratings = self.ratings.find_by_song(song_id).await.map_err(|e| {
            tracing::error!(error = %e, "Rating lookup by song failed");
            RatingError::Internal
        })?;

        if ratings.is_empty() {
            return Err(RatingError::NoneForSong(song_id));
        }

        Ok(ratings)
    }

    pub async fn get_rating_by_user_and_song(
        &self,
        user_id: Uuid,
        song_id: Uuid,
    ) -> Result<RatingDetail, RatingError> {
        self.ratings
            .find_by_user_and_song(user_id, song_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Rating lookup by user and song failed");
                RatingError::Internal
            })?
            .ok_or(RatingError::NoneForPair(user_id, song_id))
    }
}
