use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::auth::models::RegisteredUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::validate_registration;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let violations = validate_registration(&body.username, &body.password);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    state
        .auth_service
        .register(body.username, body.password)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(
                StatusCode::CREATED,
                "User registered successfully",
                user.into(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: Uuid,
    pub username: String,
}

impl From<&RegisteredUser> for RegisterResponseData {
    fn from(user: &RegisteredUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}
