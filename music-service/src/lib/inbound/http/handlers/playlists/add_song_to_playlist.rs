use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::PlaylistSongResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn add_song_to_playlist(
    State(state): State<AppState>,
    Path(playlist_id): Path<Uuid>,
    Json(body): Json<AddSongRequest>,
) -> Result<ApiSuccess<PlaylistSongResponseData>, ApiError> {
    state
        .playlist_service
        .add_song_to_playlist(playlist_id, body.song_id)
        .await
        .map_err(ApiError::from)
        .map(|ref entry| {
            ApiSuccess::new(
                StatusCode::OK,
                "Song added to playlist successfully",
                entry.into(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSongRequest {
    song_id: Uuid,
}
