use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    application::{
        error::{ApplicationError, StoreError},
        repositories::like_repository::LikeRepository,
    },
    domain::models::like::Like,
};

/// Owns the like relation. Holds no state of its own: uniqueness and
/// ordering for a given (user, post) pair are enforced by the store.
#[derive(Clone)]
pub struct LikeCoordinator {
    like_repository: Arc<dyn LikeRepository>,
}

impl LikeCoordinator {
    pub fn new(like_repository: Arc<dyn LikeRepository>) -> Self {
        Self { like_repository }
    }

    /// Ensures the like exists. Liking twice is not an error.
    pub async fn like_post(&self, user_id: i64, post_id: i64) -> Result<bool, ApplicationError> {
        let like = Like::new(user_id, post_id);

        match self.like_repository.insert_like(like).await {
            Ok(true) => info!("User {} liked post {}", user_id, post_id),
            Ok(false) => debug!("User {} already liked post {}", user_id, post_id),
            Err(StoreError::DuplicateKey) => {
                debug!(
                    "Concurrent like for user {} on post {} lost the insert race",
                    user_id, post_id
                );
            }
            Err(e) => return Err(e.into()),
        }

        Ok(true)
    }

    /// Ensures the like does not exist. Unliking twice is not an error.
    pub async fn unlike_post(&self, user_id: i64, post_id: i64) -> Result<bool, ApplicationError> {
        let removed = self
            .like_repository
            .delete_like(Like::new(user_id, post_id))
            .await?;

        if removed {
            info!("User {} unliked post {}", user_id, post_id);
        } else {
            debug!("User {} had not liked post {}", user_id, post_id);
        }

        Ok(true)
    }

    pub async fn get_post_likes_count(&self, post_id: i64) -> Result<i64, ApplicationError> {
        Ok(self.like_repository.count_by_post(post_id).await?)
    }

    pub async fn user_liked_post(
        &self,
        user_id: i64,
        post_id: i64,
    ) -> Result<bool, ApplicationError> {
        Ok(self
            .like_repository
            .exists(Like::new(user_id, post_id))
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::repositories::MemoryLikeRepository;
    use async_trait::async_trait;

    fn coordinator() -> (LikeCoordinator, Arc<MemoryLikeRepository>) {
        let repo = Arc::new(MemoryLikeRepository::new());
        (LikeCoordinator::new(repo.clone()), repo)
    }

    /// Store that always reports the insert lost a unique-constraint race.
    struct RacingLikeRepository;

    #[async_trait]
    impl LikeRepository for RacingLikeRepository {
        async fn insert_like(&self, _like: Like) -> Result<bool, StoreError> {
            Err(StoreError::DuplicateKey)
        }
        async fn delete_like(&self, _like: Like) -> Result<bool, StoreError> {
            Ok(false)
        }
        async fn count_by_post(&self, _post_id: i64) -> Result<i64, StoreError> {
            Ok(1)
        }
        async fn exists(&self, _like: Like) -> Result<bool, StoreError> {
            Ok(true)
        }
    }

    struct BrokenLikeRepository;

    #[async_trait]
    impl LikeRepository for BrokenLikeRepository {
        async fn insert_like(&self, _like: Like) -> Result<bool, StoreError> {
            Err(StoreError::Failure("connection reset".into()))
        }
        async fn delete_like(&self, _like: Like) -> Result<bool, StoreError> {
            Err(StoreError::Failure("connection reset".into()))
        }
        async fn count_by_post(&self, _post_id: i64) -> Result<i64, StoreError> {
            Err(StoreError::Failure("connection reset".into()))
        }
        async fn exists(&self, _like: Like) -> Result<bool, StoreError> {
            Err(StoreError::Failure("connection reset".into()))
        }
    }

    #[tokio::test]
    async fn like_then_like_again_then_unlike() {
        let (likes, _) = coordinator();

        assert!(likes.like_post(7, 3).await.unwrap());
        assert!(likes.user_liked_post(7, 3).await.unwrap());
        assert_eq!(likes.get_post_likes_count(3).await.unwrap(), 1);

        assert!(likes.like_post(7, 3).await.unwrap());
        assert_eq!(likes.get_post_likes_count(3).await.unwrap(), 1);

        assert!(likes.unlike_post(7, 3).await.unwrap());
        assert!(!likes.user_liked_post(7, 3).await.unwrap());
        assert_eq!(likes.get_post_likes_count(3).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unlike_without_like_succeeds() {
        let (likes, repo) = coordinator();

        assert!(likes.unlike_post(1, 9).await.unwrap());
        assert!(likes.unlike_post(1, 9).await.unwrap());
        assert!(!likes.user_liked_post(1, 9).await.unwrap());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn like_unlike_round_trip_restores_state() {
        let (likes, _) = coordinator();
        likes.like_post(2, 5).await.unwrap();
        let before = likes.get_post_likes_count(5).await.unwrap();

        likes.like_post(1, 5).await.unwrap();
        likes.unlike_post(1, 5).await.unwrap();

        assert!(!likes.user_liked_post(1, 5).await.unwrap());
        assert_eq!(likes.get_post_likes_count(5).await.unwrap(), before);
    }

    #[tokio::test]
    async fn count_matches_likers() {
        let (likes, _) = coordinator();
        for user_id in 1..=5 {
            likes.like_post(user_id, 10).await.unwrap();
        }
        likes.like_post(3, 11).await.unwrap();
        likes.unlike_post(2, 10).await.unwrap();
        likes.like_post(4, 10).await.unwrap();

        let mut likers = 0;
        for user_id in 1..=5 {
            if likes.user_liked_post(user_id, 10).await.unwrap() {
                likers += 1;
            }
        }
        assert_eq!(likes.get_post_likes_count(10).await.unwrap(), likers);
        assert_eq!(likers, 4);
        assert_eq!(likes.get_post_likes_count(11).await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_likes_create_one_row() {
        let (likes, repo) = coordinator();
        let before = likes.get_post_likes_count(3).await.unwrap();

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let likes = likes.clone();
                tokio::spawn(async move { likes.like_post(7, 3).await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().unwrap());
        }

        assert_eq!(likes.get_post_likes_count(3).await.unwrap(), before + 1);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn duplicate_key_race_is_success() {
        let likes = LikeCoordinator::new(Arc::new(RacingLikeRepository));
        assert!(likes.like_post(7, 3).await.unwrap());
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let likes = LikeCoordinator::new(Arc::new(BrokenLikeRepository));

        assert!(matches!(
            likes.like_post(7, 3).await,
            Err(ApplicationError::StoreFailure(_))
        ));
        assert!(matches!(
            likes.unlike_post(7, 3).await,
            Err(ApplicationError::StoreFailure(_))
        ));
        assert!(matches!(
            likes.get_post_likes_count(3).await,
            Err(ApplicationError::StoreFailure(_))
        ));
        assert!(matches!(
            likes.user_liked_post(7, 3).await,
            Err(ApplicationError::StoreFailure(_))
        ));
    }
}
