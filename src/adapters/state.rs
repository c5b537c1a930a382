use axum::extract::FromRef;
use std::sync::Arc;

use crate::application::services::{LikeCoordinator, TokenValidator};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub token_validator: Arc<dyn TokenValidator>,
    pub like_coordinator: LikeCoordinator,
}
