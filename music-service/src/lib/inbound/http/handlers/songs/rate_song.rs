use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::SongRatingResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn rate_song(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(song_id): Path<Uuid>,
    Json(body): Json<RateSongRequest>,
) -> Result<ApiSuccess<SongRatingResponseData>, ApiError> {
    state
        .song_service
        .rate_song(user.user_id, song_id, body.rating)
        .await
        .map_err(ApiError::from)
        .map(|ref rating| ApiSuccess::without_message(StatusCode::OK, rating.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateSongRequest {
    rating: i32,
}
