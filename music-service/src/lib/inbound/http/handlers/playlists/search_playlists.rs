use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::PlaylistResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn search_playlists(
    State(state): State<AppState>,
    Query(query): Query<SearchPlaylistsQuery>,
) -> Result<ApiSuccess<Vec<PlaylistResponseData>>, ApiError> {
    state
        .playlist_service
        .search_playlists(query.name.as_deref(), query.genre.as_deref())
        .await
        .map_err(ApiError::from)
        .map(|playlists| {
            ApiSuccess::new(
                StatusCode::OK,
                "Playlists search results",
                playlists.iter().map(PlaylistResponseData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPlaylistsQuery {
    name: Option<String>,
    genre: Option<String>,
}
