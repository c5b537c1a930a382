use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow, Row};

use crate::application::dto::like_dto::LikeDTO;

impl FromRow<'_, PgRow> for LikeDTO {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(LikeDTO {
            user_id: row.try_get("user_id")?,
            post_id: row.try_get("post_id")?,
        })
    }
}

/// Body returned by like and unlike.
#[derive(Debug, Serialize)]
pub struct ToggleLikeResponse {
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub success: bool,
    pub liked: bool,
}

#[derive(Debug, Serialize)]
pub struct LikedResponse {
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub liked: bool,
}

#[derive(Debug, Serialize)]
pub struct LikesCountResponse {
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub count: i64,
}
