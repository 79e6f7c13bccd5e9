use axum::extract::State;
use axum::http::StatusCode;

use super::RatingResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_all_ratings(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<RatingResponseData>>, ApiError> {
    state
        .rating_service
        .get_all_ratings()
        .await
        .map_err(ApiError::from)
        .map(|ratings| {
            ApiSuccess::without_message(
                StatusCode::OK,
                ratings.iter().map(RatingResponseData::from).collect(),
            )
        })
}
