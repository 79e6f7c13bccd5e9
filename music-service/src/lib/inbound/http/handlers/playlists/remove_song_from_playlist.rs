use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn remove_song_from_playlist(
    State(state): State<AppState>,
    Path((playlist_id, song_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state
        .playlist_service
        .remove_song_from_playlist(playlist_id, song_id)
        .await
        .map_err(ApiError::from)
        .map(|()| StatusCode::NO_CONTENT)
}
