use async_trait::async_trait;

use crate::{application::error::StoreError, domain::models::like::Like};

/// Persistence for the like relation. Every method is a single atomic store
/// operation; implementations must keep (user_id, post_id) unique.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Inserts the like unless it already exists.
    ///
    /// # Returns
    /// - Ok(true) if a row was created
    /// - Ok(false) if the pair was already present
    /// - Err(DuplicateKey) if a concurrent insert won the unique constraint
    async fn insert_like(&self, like: Like) -> Result<bool, StoreError>;

    /// Deletes the like if present. Returns whether a row was removed.
    async fn delete_like(&self, like: Like) -> Result<bool, StoreError>;

    async fn count_by_post(&self, post_id: i64) -> Result<i64, StoreError>;

    async fn exists(&self, like: Like) -> Result<bool, StoreError>;
}
