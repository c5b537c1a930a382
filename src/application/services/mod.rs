pub mod like_coordinator;
pub mod token_validator;

pub use like_coordinator::LikeCoordinator;
pub use token_validator::{JwtTokenValidator, TokenValidator};
