use serde::{Deserialize, Serialize};

use crate::domain::models::user::User;

#[derive(Debug, Serialize, Deserialize)]
pub struct UserDTO {
    pub id: i64,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        UserDTO {
            id: value.id,
            email: Some(value.email),
            name: Some(value.name),
        }
    }
}

impl From<UserDTO> for User {
    fn from(value: UserDTO) -> Self {
        User {
            id: value.id,
            email: value.email.unwrap_or_default(),
            name: value.name.unwrap_or_default(),
        }
    }
}
