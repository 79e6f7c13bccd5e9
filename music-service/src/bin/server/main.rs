use std::sync::Arc;

use auth::Authenticator;
use music_service::config::Config;
use music_service::domain::auth::service::AuthService;
use music_service::domain::playlist::service::PlaylistService;
use music_service::domain::rating::service::RatingService;
use music_service::domain::song::service::SongService;
use music_service::inbound::http::router::create_router;
use music_service::inbound::http::router::AppState;
use music_service::outbound::repositories::playlist::PostgresPlaylistRepository;
use music_service::outbound::repositories::rating::PostgresRatingRepository;
use music_service::outbound::repositories::song::PostgresSongRepository;
use music_service::outbound::repositories::user::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "music_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "music-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let playlist_repository = Arc::new(PostgresPlaylistRepository::new(pg_pool.clone()));
    let song_repository = Arc::new(PostgresSongRepository::new(pg_pool.clone()));
    let rating_repository = Arc::new(PostgresRatingRepository::new(pg_pool));

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            user_repository,
            Arc::clone(&authenticator),
        )),
        playlist_service: Arc::new(PlaylistService::new(
            playlist_repository,
            Arc::clone(&song_repository),
        )),
        song_service: Arc::new(SongService::new(
            song_repository,
            Arc::clone(&rating_repository),
        )),
        rating_service: Arc::new(RatingService::new(rating_repository)),
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
