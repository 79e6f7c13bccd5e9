use axum::extract::State;
use axum::http::StatusCode;

use super::SongResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_all_songs(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<SongResponseData>>, ApiError> {
    state
        .song_service
        .get_all_songs()
        .await
        .map_err(ApiError::from)
        .map(|songs| {
            ApiSuccess::without_message(
                StatusCode::OK,
                songs.iter().map(SongResponseData::from).collect(),
            )
        })
}
