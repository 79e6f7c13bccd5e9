use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login::login;
use super::handlers::auth::register::register;
use super::handlers::playlists::add_song_to_playlist::add_song_to_playlist;
use super::handlers::playlists::create_playlist::create_playlist;
use super::handlers::playlists::get_user_playlists::get_user_playlists;
use super::handlers::playlists::remove_song_from_playlist::remove_song_from_playlist;
use super::handlers::playlists::search_playlists::search_playlists;
use super::handlers::ratings::get_all_ratings::get_all_ratings;
use super::handlers::ratings::get_rating_by_user_and_song::get_rating_by_user_and_song;
use super::handlers::ratings::get_ratings_by_song::get_ratings_by_song;
use super::handlers::ratings::get_ratings_by_user::get_ratings_by_user;
use super::handlers::songs::create_song::create_song;
use super::handlers::songs::delete_song::delete_song;
use super::handlers::songs::get_all_songs::get_all_songs;
use super::handlers::songs::get_song::get_song;
use super::handlers::songs::rate_song::rate_song;
use super::handlers::songs::update_song::update_song;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::service::AuthService;
use crate::domain::playlist::service::PlaylistService;
use crate::domain::rating::service::RatingService;
use crate::domain::song::service::SongService;
use crate::outbound::repositories::playlist::PostgresPlaylistRepository;
use crate::outbound::repositories::rating::PostgresRatingRepository;
use crate::outbound::repositories::song::PostgresSongRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub playlist_service: Arc<PlaylistService<PostgresPlaylistRepository, PostgresSongRepository>>,
    pub song_service: Arc<SongService<PostgresSongRepository, PostgresRatingRepository>>,
    pub rating_service: Arc<RatingService<PostgresRatingRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState) -> Router {
    // Song catalog reads and the rating feed are public; everything that
    // writes, or that exposes per-user data, sits behind the token gate.
    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/songs", get(get_all_songs))
        .route("/api/songs/:id", get(get_song))
        .route("/api/song_ratings", get(get_all_ratings))
        .route("/api/song_ratings/song/:song_id", get(get_ratings_by_song));

    let protected_routes = Router::new()
        .route("/api/playlists", post(create_playlist))
        .route("/api/playlists", get(get_user_playlists))
        .route("/api/playlists/search", get(search_playlists))
        .route("/api/playlists/:id/songs", post(add_song_to_playlist))
        .route(
            "/api/playlists/:id/songs/:song_id",
            delete(remove_song_from_playlist),
        )
        .route("/api/songs", post(create_song))
        .route("/api/songs/:id", put(update_song))
        .route("/api/songs/:id", delete(delete_song))
        .route("/api/songs/:id/rate", put(rate_song))
        .route("/api/song_ratings/user/:user_id", get(get_ratings_by_user))
        .route(
            "/api/song_ratings/user/:user_id/song/:song_id",
            get(get_rating_by_user_and_song),
        )
        .route(
            "/api/song_ratings/song/:song_id/user/:user_id",
            get(get_rating_by_user_and_song),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
