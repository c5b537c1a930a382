pub mod like_dto;
pub mod user_dto;
