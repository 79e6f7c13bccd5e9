use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::SongRequest;
use super::SongResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_song(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SongRequest>,
) -> Result<ApiSuccess<SongResponseData>, ApiError> {
    state
        .song_service
        .update_song(id, body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref song| ApiSuccess::without_message(StatusCode::OK, song.into()))
}
