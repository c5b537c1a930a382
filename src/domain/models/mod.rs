pub mod claims;
pub mod like;
pub mod user;
