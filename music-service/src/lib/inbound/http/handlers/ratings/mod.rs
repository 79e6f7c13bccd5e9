use serde::Serialize;
use uuid::Uuid;

use crate::domain::rating::models::RatingDetail;

pub mod get_all_ratings;
pub mod get_rating_by_user_and_song;
pub mod get_ratings_by_song;
pub mod get_ratings_by_user;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingUserData {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingSongData {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingResponseData {
    pub user: RatingUserData,
    pub song: RatingSongData,
    pub rating: i32,
}

impl From<&RatingDetail> for RatingResponseData {
    fn from(detail: &RatingDetail) -> Self {
        Self {
            user: RatingUserData {
                id: detail.user.id,
                username: detail.user.username.clone(),
            },
            song: RatingSongData {
                id: detail.song.id,
                title: detail.song.title.clone(),
                artist: detail.song.artist.clone(),
            },
            rating: detail.rating,
        }
    }
}
