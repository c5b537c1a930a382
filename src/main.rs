mod adapters;
mod application;
mod domain;

use std::sync::Arc;

use adapters::{
    repositories::{PgLikeRepository, PgUserRepository},
    router::{cors_layer, router},
    state::AppState,
};
use application::{
    repositories::{like_repository::LikeRepository, user_repository::UserRepository},
    services::{JwtTokenValidator, LikeCoordinator, TokenValidator},
};
use domain::config::app::AppConfig;
use tracing_subscriber::EnvFilter;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Refuse to start without a signing secret rather than accept any token.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("ERROR: invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting post-likes-service with {:?}", config);

    tracing::info!("Connecting to database...");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.database_url)
        .await
        .expect("ERROR: Failed to connect to PostgreSQL database. Check DATABASE_URL and network connectivity.");
    tracing::info!("Database connection established");

    // Initialize repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone())) as Arc<dyn UserRepository>;
    let like_repo = Arc::new(PgLikeRepository::new(pool)) as Arc<dyn LikeRepository>;

    let app_state = AppState {
        token_validator: Arc::new(JwtTokenValidator::new(&config.jwt_secret, user_repo))
            as Arc<dyn TokenValidator>,
        like_coordinator: LikeCoordinator::new(like_repo),
    };

    let router = router(
        app_state,
        cors_layer(config.cors_allowed_origins.as_deref()),
    );

    // Start the server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");
}
