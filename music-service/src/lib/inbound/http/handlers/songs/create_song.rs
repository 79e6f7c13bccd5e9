use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::SongRequest;
use super::SongResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_song(
    State(state): State<AppState>,
    Json(body): Json<SongRequest>,
) -> Result<ApiSuccess<SongResponseData>, ApiError> {
    state
        .song_service
        .create_song(body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref song| ApiSuccess::without_message(StatusCode::CREATED, song.into()))
}
