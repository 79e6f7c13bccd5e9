use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use super::RatingResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_ratings_by_song(
    State(state): State<AppState>,
    Path(song_id): Path<Uuid>,
) -> Result<ApiSuccess<Vec<RatingResponseData>>, ApiError> {
    state
        .rating_service
        .get_ratings_by_song(song_id)
        .await
        .map_err(ApiError::from)
        .map(|ratings| {
            ApiSuccess::without_message(
                StatusCode::OK,
                ratings.iter().map(RatingResponseData::from).collect(),
            )
        })
}
