use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::PlaylistWithSongsResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_user_playlists(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<PlaylistWithSongsResponseData>>, ApiError> {
    state
        .playlist_service
        .get_user_playlists(user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|playlists| {
            ApiSuccess::new(
                StatusCode::OK,
                "User playlists retrieved successfully",
                playlists
                    .iter()
                    .map(PlaylistWithSongsResponseData::from)
                    .collect(),
            )
        })
}
