use async_trait::async_trait;
use sqlx::query_as;

use crate::{
    application::{
        dto::user_dto::UserDTO, error::StoreError, repositories::user_repository::UserRepository,
    },
    domain::models::user::User,
};

pub struct PgUserRepository {
    pool: sqlx::PgPool,
}

impl PgUserRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_user(&self, user_id: i64) -> Result<Option<User>, StoreError> {
        let query = "SELECT id, email, name FROM application.users WHERE id = $1";
        let fetched: Option<UserDTO> = query_as::<_, UserDTO>(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from)?;
        Ok(fetched.map(Into::into))
    }
}
