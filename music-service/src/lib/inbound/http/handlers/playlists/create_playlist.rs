use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::PlaylistResponseData;
use crate::domain::playlist::models::CreatePlaylistCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_playlist(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<CreatePlaylistRequest>,
) -> Result<ApiSuccess<PlaylistResponseData>, ApiError> {
    state
        .playlist_service
        .create_playlist(
            user.user_id,
            CreatePlaylistCommand {
                name: body.name,
                genre: body.genre,
            },
        )
        .await
        .map_err(ApiError::from)
        .map(|ref playlist| {
            ApiSuccess::new(
                StatusCode::CREATED,
                "Playlist created successfully",
                playlist.into(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePlaylistRequest {
    name: String,
    genre: String,
}
