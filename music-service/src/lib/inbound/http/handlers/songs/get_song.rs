use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use super::SongResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ApiSuccess<SongResponseData>, ApiError> {
    state
        .song_service
        .get_song_by_id(id)
        .await
        .map_err(ApiError::from)
        .map(|ref song| ApiSuccess::without_message(StatusCode::OK, song.into()))
}
