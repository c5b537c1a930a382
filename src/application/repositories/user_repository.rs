use async_trait::async_trait;

use crate::{application::error::StoreError, domain::models::user::User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Read-only lookup used to resolve a token subject.
    async fn find_user(&self, user_id: i64) -> Result<Option<User>, StoreError>;
}
