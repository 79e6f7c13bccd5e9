use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use super::RatingResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Named params so the handler serves both path orderings,
/// `/user/:user_id/song/:song_id` and `/song/:song_id/user/:user_id`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PairParams {
    user_id: Uuid,
    song_id: Uuid,
}

pub async fn get_rating_by_user_and_song(
    State(state): State<AppState>,
    Path(params): Path<PairParams>,
) -> Result<ApiSuccess<RatingResponseData>, ApiError> {
    state
        .rating_service
        .get_rating_by_user_and_song(params.user_id, params.song_id)
        .await
        .map_err(ApiError::from)
        .map(|ref rating| ApiSuccess::without_message(StatusCode::OK, rating.into()))
}
