use sqlx::{postgres::PgRow, FromRow, Row};

use crate::application::dto::user_dto::UserDTO;

impl FromRow<'_, PgRow> for UserDTO {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(UserDTO {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
        })
    }
}
