use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use uuid::Uuid;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Identity attached to a request once its bearer token checks out.
/// Dropped with the request; nothing about it is persisted.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Middleware guarding protected routes. Verifies the bearer token's
/// signature and expiry, then stores the caller's identity in request
/// extensions for handlers to read.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::error!(error = %e, "Token subject is not a valid user ID");
        ApiError::Unauthorized("Invalid token format".to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response()
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use auth::Authenticator;
    use axum::body::Body;
    use axum::http::Request;
    use axum::http::StatusCode;
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::Extension;
    use axum::Router;
    use sqlx::PgPool;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::auth::service::AuthService;
    use crate::domain::playlist::service::PlaylistService;
    use crate::domain::rating::service::RatingService;
    use crate::domain::song::service::SongService;
    use crate::outbound::repositories::playlist::PostgresPlaylistRepository;
    use crate::outbound::repositories::rating::PostgresRatingRepository;
    use crate::outbound::repositories::song::PostgresSongRepository;
    use crate::outbound::repositories::user::PostgresUserRepository;

    const SECRET: &[u8] = b"test-secret";

    // connect_lazy performs no IO, so state can be built without a
    // database; these tests never get past the middleware.
    fn test_state(authenticator: Arc<Authenticator>) -> AppState {
        let pool = PgPool::connect_lazy("postgres://localhost/unused")
            .expect("lazy pool construction failed");

        let users = Arc::new(PostgresUserRepository::new(pool.clone()));
        let playlists = Arc::new(PostgresPlaylistRepository::new(pool.clone()));
        let songs = Arc::new(PostgresSongRepository::new(pool.clone()));
        let ratings = Arc::new(PostgresRatingRepository::new(pool));

        AppState {
            auth_service: Arc::new(AuthService::new(users, authenticator.clone())),
            playlist_service: Arc::new(PlaylistService::new(playlists, songs.clone())),
            song_service: Arc::new(SongService::new(songs, ratings.clone())),
            rating_service: Arc::new(RatingService::new(ratings)),
            authenticator,
        }
    }

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        user.username
    }

    fn guarded_app(state: AppState) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(from_fn_with_state(state.clone(), authenticate))
            .with_state(state)
    }

    fn request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder.body(Body::empty()).expect("request build failed")
    }

    #[tokio::test]
    async fn valid_token_reaches_the_handler() {
        let authenticator = Arc::new(Authenticator::new(SECRET, 24));
        let user_id = Uuid::new_v4();
        let hash = authenticator
            .hash_password("Secr3t!pw")
            .expect("hashing failed");
        let issued = authenticator
            .authenticate("Secr3t!pw", &hash, &user_id.to_string(), "alice")
            .expect("token issue failed");

        let app = guarded_app(test_state(authenticator));
        let response = app
            .oneshot(request(Some(&issued.access_token)))
            .await
            .expect("request failed");

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        assert_eq!(&body[..], b"alice");
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let authenticator = Arc::new(Authenticator::new(SECRET, 24));
        let app = guarded_app(test_state(authenticator));

        let response = app.oneshot(request(None)).await.expect("request failed");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let foreign = Authenticator::new(b"other-secret", 24);
        let user_id = Uuid::new_v4();
        let hash = foreign.hash_password("Secr3t!pw").expect("hashing failed");
        let issued = foreign
            .authenticate("Secr3t!pw", &hash, &user_id.to_string(), "alice")
            .expect("token issue failed");

        let authenticator = Arc::new(Authenticator::new(SECRET, 24));
        let app = guarded_app(test_state(authenticator));

        let response = app
            .oneshot(request(Some(&issued.access_token)))
            .await
            .expect("request failed");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let issuing = Authenticator::new(SECRET, -2);
        let user_id = Uuid::new_v4();
        let hash = issuing.hash_password("Secr3t!pw").expect("hashing failed");
        let issued = issuing
            .authenticate("Secr3t!pw", &hash, &user_id.to_string(), "alice")
            .expect("token issue failed");

        let authenticator = Arc::new(Authenticator::new(SECRET, 24));
        let app = guarded_app(test_state(authenticator));

        let response = app
            .oneshot(request(Some(&issued.access_token)))
            .await
            .expect("request failed");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_scheme_is_rejected() {
        let authenticator = Arc::new(Authenticator::new(SECRET, 24));
        let app = guarded_app(test_state(authenticator));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header("Authorization", "Token abc")
                    .body(Body::empty())
                    .expect("request build failed"),
            )
            .await
            .expect("request failed");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
