#[cfg(test)]
mod memory_repository;
mod pg_like_repository;
mod pg_user_repository;

#[cfg(test)]
pub use memory_repository::{MemoryLikeRepository, MemoryUserRepository};
pub use pg_like_repository::PgLikeRepository;
pub use pg_user_repository::PgUserRepository;
