//! Response envelope and error normalization.
//!
//! Every response leaves through one of two shapes:
//! `{"success": true, "message": <optional>, "data": ...}` on success, and
//! `{"success": false, "message": ..., "data": null}` on failure (with an
//! `errors` array instead of `data` for validation failures). Handlers
//! return `Result<ApiSuccess<_>, ApiError>`; all status/message mapping
//! happens here, once.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::playlist::errors::PlaylistError;
use crate::domain::rating::errors::RatingError;
use crate::domain::song::errors::SongError;
use crate::inbound::http::validation::collapse_messages;
use crate::inbound::http::validation::FieldError;

pub mod auth;
pub mod playlists;
pub mod ratings;
pub mod songs;

/// Successful response: a status code plus the standard envelope.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<ApiResponseBody<T>>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(Some(message.into()), data)))
    }

    /// Envelope without a `message` field; some legacy endpoints never
    /// carried one.
    pub fn without_message(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(None, data)))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponseBody<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    data: T,
}

impl<T: Serialize> ApiResponseBody<T> {
    fn new(message: Option<String>, data: T) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}

/// Normalized failure. Domain errors convert into one of these; the
/// `IntoResponse` impl is the single exit path to the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
    /// Raw `"<field> <description>"` messages from request validation,
    /// collapsed to one message per field on the way out.
    Validation(Vec<String>),
}

#[derive(Debug, Clone, Serialize)]
struct ApiErrorBody {
    success: bool,
    message: String,
    // Always serialized as `null`; legacy clients expect the key.
    data: Option<()>,
}

#[derive(Debug, Clone, Serialize)]
struct ValidationErrorBody {
    success: bool,
    message: String,
    errors: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(raw_messages) => {
                let body = ValidationErrorBody {
                    success: false,
                    message: "Validation failed".to_string(),
                    errors: collapse_messages(&raw_messages),
                };
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            // The legacy surface reports duplicate usernames as 400, and
            // clients match on it; do not change to 409 unilaterally.
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ApiErrorBody {
            success: false,
            message,
            data: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UsernameTaken => ApiError::Conflict(err.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::RegistrationFailed | AuthError::LoginFailed => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<PlaylistError> for ApiError {
    fn from(err: PlaylistError) -> Self {
        match err {
            PlaylistError::NoPlaylists | PlaylistError::SongNotFound => {
                ApiError::NotFound(err.to_string())
            }
            PlaylistError::CreateFailed
            | PlaylistError::FetchFailed
            | PlaylistError::AddSongFailed
            | PlaylistError::RemoveSongFailed
            | PlaylistError::SearchFailed => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<SongError> for ApiError {
    fn from(err: SongError) -> Self {
        match err {
            SongError::NoSongs | SongError::NotFound => ApiError::NotFound(err.to_string()),
            SongError::CreateFailed
            | SongError::FetchFailed
            | SongError::FetchByIdFailed
            | SongError::UpdateFailed
            | SongError::DeleteFailed
            | SongError::RateFailed => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<RatingError> for ApiError {
    fn from(err: RatingError) -> Self {
        match err {
            RatingError::NoRatings
            | RatingError::NoneForUser(_)
            | RatingError::NoneForSong(_)
            | RatingError::NoneForPair(_, _) => ApiError::NotFound(err.to_string()),
            RatingError::Internal => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::json;
    use serde_json::Value;

    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        serde_json::from_slice(&bytes).expect("body is not JSON")
    }

    #[tokio::test]
    async fn success_envelope_carries_message_and_data() {
        let response =
            ApiSuccess::new(StatusCode::CREATED, "User registered successfully", json!({"id": 1}))
                .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": true,
                "message": "User registered successfully",
                "data": {"id": 1}
            })
        );
    }

    #[tokio::test]
    async fn success_envelope_omits_absent_message() {
        let response =
            ApiSuccess::without_message(StatusCode::OK, json!([1, 2, 3])).into_response();

        assert_eq!(
            body_json(response).await,
            json!({"success": true, "data": [1, 2, 3]})
        );
    }

    #[tokio::test]
    async fn error_envelope_has_null_data() {
        let response = ApiError::NotFound("Song not found".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": "Song not found", "data": null})
        );
    }

    #[tokio::test]
    async fn conflict_renders_as_legacy_400() {
        let response = ApiError::from(AuthError::UsernameTaken).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": "Username is already taken", "data": null})
        );
    }

    #[tokio::test]
    async fn unauthorized_carries_domain_message_verbatim() {
        let response = ApiError::from(AuthError::InvalidCredentials).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["message"],
            "Username or password is not valid"
        );
    }

    #[tokio::test]
    async fn validation_failure_collapses_to_one_message_per_field() {
        let response = ApiError::Validation(vec![
            "username Username is required".to_string(),
            "username Username must be at least 3 characters".to_string(),
            "password Password is required".to_string(),
        ])
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": false,
                "message": "Validation failed",
                "errors": [
                    {"field": "username", "message": "Username must be at least 3 characters"},
                    {"field": "password", "message": "Password is required"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn unexpected_faults_stay_masked() {
        let response = ApiError::from(AuthError::LoginFailed).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "Error when loggin");
    }
}
