pub mod like_repository;
pub mod user_repository;
