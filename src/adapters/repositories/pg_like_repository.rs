use async_trait::async_trait;
use sqlx::{query_as, query_scalar};
use tracing::debug;

use crate::{
    application::{
        dto::like_dto::LikeDTO, error::StoreError,
        repositories::like_repository::LikeRepository,
    },
    domain::models::like::Like,
};

/// Likes live in `application.likes` with `UNIQUE (user_id, post_id)`.
pub struct PgLikeRepository {
    pool: sqlx::PgPool,
}

impl PgLikeRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    async fn insert_like(&self, like: Like) -> Result<bool, StoreError> {
        let query = r#"
            INSERT INTO application.likes (user_id, post_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, post_id) DO NOTHING
            RETURNING user_id, post_id
        "#;
        let inserted: Option<LikeDTO> = query_as::<_, LikeDTO>(query)
            .bind(like.user_id)
            .bind(like.post_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from)?;

        debug!("Insert like {:?}: created={}", like, inserted.is_some());
        Ok(inserted.is_some())
    }

    async fn delete_like(&self, like: Like) -> Result<bool, StoreError> {
        let query = "DELETE FROM application.likes WHERE user_id = $1 AND post_id = $2";
        let result = sqlx::query(query)
            .bind(like.user_id)
            .bind(like.post_id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from)?;

        debug!("Delete like {:?}: rows={}", like, result.rows_affected());
        Ok(result.rows_affected() > 0)
    }

    async fn count_by_post(&self, post_id: i64) -> Result<i64, StoreError> {
        query_scalar::<_, i64>("SELECT COUNT(*) FROM application.likes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from)
    }

    async fn exists(&self, like: Like) -> Result<bool, StoreError> {
        let query = r#"
            SELECT EXISTS (
                SELECT 1 FROM application.likes WHERE user_id = $1 AND post_id = $2
            )
        "#;
        query_scalar::<_, bool>(query)
            .bind(like.user_id)
            .bind(like.post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from)
    }
}
