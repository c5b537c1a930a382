use axum::{
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::adapters::{
    controllers::{health_controller::HealthController, like_controller::LikeController},
    middleware::require_auth,
    state::AppState,
};

/// Builds the CORS layer. Without an explicit origin list every origin is allowed.
pub fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    match allowed_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    }
}

pub fn router(app_state: AppState, cors: CorsLayer) -> Router {
    // Routes that require a valid bearer token
    let protected_routes = Router::new()
        .route(
            "/api/v1/posts/{post_id}/like",
            get(LikeController::user_liked_post)
                .post(LikeController::like_post)
                .delete(LikeController::unlike_post),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    let public_routes = Router::new()
        .route("/api/v1/health", get(HealthController::health_check))
        .route(
            "/api/v1/posts/{post_id}/likes",
            get(LikeController::post_likes_count),
        );

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
