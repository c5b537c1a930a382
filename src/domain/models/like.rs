use serde::{Deserialize, Serialize};

/// A user's like on a post. The (user_id, post_id) pair is the whole identity:
/// there is never more than one `Like` for the same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "postId")]
    pub post_id: i64,
}

impl Like {
    pub fn new(user_id: i64, post_id: i64) -> Self {
        Self { user_id, post_id }
    }
}
