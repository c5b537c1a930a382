use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;

use crate::{
    application::{
        error::StoreError,
        repositories::{like_repository::LikeRepository, user_repository::UserRepository},
    },
    domain::models::{like::Like, user::User},
};

/// In-process like store. The set itself is the unique constraint.
#[derive(Default)]
pub struct MemoryLikeRepository {
    likes: Mutex<HashSet<Like>>,
}

impl MemoryLikeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.likes.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LikeRepository for MemoryLikeRepository {
    async fn insert_like(&self, like: Like) -> Result<bool, StoreError> {
        Ok(self.likes.lock().unwrap().insert(like))
    }

    async fn delete_like(&self, like: Like) -> Result<bool, StoreError> {
        Ok(self.likes.lock().unwrap().remove(&like))
    }

    async fn count_by_post(&self, post_id: i64) -> Result<i64, StoreError> {
        let likes = self.likes.lock().unwrap();
        Ok(likes.iter().filter(|l| l.post_id == post_id).count() as i64)
    }

    async fn exists(&self, like: Like) -> Result<bool, StoreError> {
        Ok(self.likes.lock().unwrap().contains(&like))
    }
}

#[derive(Default)]
pub struct MemoryUserRepository {
    users: HashMap<i64, User>,
}

impl MemoryUserRepository {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_user(&self, user_id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(&user_id).cloned())
    }
}
