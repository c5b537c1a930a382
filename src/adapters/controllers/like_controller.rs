use axum::{
    extract::{rejection::PathRejection, Path, State},
    Extension, Json,
};
use tracing::{info, warn};

use crate::{
    adapters::{
        dto::like_dto::{LikedResponse, LikesCountResponse, ToggleLikeResponse},
        middleware::AuthenticatedUser,
    },
    application::{error::ApplicationError, services::LikeCoordinator},
};

pub struct LikeController;

fn post_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApplicationError> {
    let Path(post_id) = path.map_err(|e| {
        warn!("Invalid post id: {}", e);
        ApplicationError::BadRequest("Invalid post id".to_string())
    })?;
    Ok(post_id)
}

impl LikeController {
    /// POST /api/v1/posts/{post_id}/like
    pub async fn like_post(
        State(likes): State<LikeCoordinator>,
        Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
        path: Result<Path<i64>, PathRejection>,
    ) -> Result<Json<ToggleLikeResponse>, ApplicationError> {
        let post_id = post_id(path)?;
        info!("User {} likes post {}", user.id, post_id);
        let success = likes.like_post(user.id, post_id).await?;
        Ok(Json(ToggleLikeResponse {
            post_id,
            success,
            liked: true,
        }))
    }

    /// DELETE /api/v1/posts/{post_id}/like
    pub async fn unlike_post(
        State(likes): State<LikeCoordinator>,
        Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
        path: Result<Path<i64>, PathRejection>,
    ) -> Result<Json<ToggleLikeResponse>, ApplicationError> {
        let post_id = post_id(path)?;
        info!("User {} unlikes post {}", user.id, post_id);
        let success = likes.unlike_post(user.id, post_id).await?;
        Ok(Json(ToggleLikeResponse {
            post_id,
            success,
            liked: false,
        }))
    }

    /// GET /api/v1/posts/{post_id}/like
    pub async fn user_liked_post(
        State(likes): State<LikeCoordinator>,
        Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
        path: Result<Path<i64>, PathRejection>,
    ) -> Result<Json<LikedResponse>, ApplicationError> {
        let post_id = post_id(path)?;
        let liked = likes.user_liked_post(user.id, post_id).await?;
        Ok(Json(LikedResponse { post_id, liked }))
    }

    /// GET /api/v1/posts/{post_id}/likes, no authentication.
    pub async fn post_likes_count(
        State(likes): State<LikeCoordinator>,
        path: Result<Path<i64>, PathRejection>,
    ) -> Result<Json<LikesCountResponse>, ApplicationError> {
        let post_id = post_id(path)?;
        let count = likes.get_post_likes_count(post_id).await?;
        Ok(Json(LikesCountResponse { post_id, count }))
    }
}
