use serde::{Deserialize, Serialize};

use crate::domain::models::like::Like;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeDTO {
    pub user_id: i64,
    pub post_id: i64,
}

impl From<Like> for LikeDTO {
    fn from(value: Like) -> Self {
        LikeDTO {
            user_id: value.user_id,
            post_id: value.post_id,
        }
    }
}

impl From<LikeDTO> for Like {
    fn from(value: LikeDTO) -> Self {
        Like::new(value.user_id, value.post_id)
    }
}
