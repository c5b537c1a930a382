use serde::{Deserialize, Serialize};

/// Claims carried by a session token. Timestamps are seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the user the token was issued to.
    pub sub: i64,
    pub iat: i64,
    pub exp: i64,
}
