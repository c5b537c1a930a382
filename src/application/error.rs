use thiserror::Error;

/// Why a bearer token was refused. Callers only ever see a uniform 401; the
/// variant exists for logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("bearer token is missing")]
    MissingToken,

    #[error("token signature or structure is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token subject {0} does not resolve to a user")]
    UnknownSubject(i64),

    #[error("user lookup failed: {0}")]
    Lookup(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The row already exists under a unique constraint.
    #[error("duplicate key")]
    DuplicateKey,

    #[error("store failure: {0}")]
    Failure(String),
}

#[derive(Debug)]
pub enum ApplicationError {
    BadRequest(String),
    Unauthorized(AuthError),
    StoreFailure(String),
}

impl From<AuthError> for ApplicationError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Lookup(msg) => ApplicationError::StoreFailure(msg),
            other => ApplicationError::Unauthorized(other),
        }
    }
}

impl From<StoreError> for ApplicationError {
    fn from(error: StoreError) -> Self {
        ApplicationError::StoreFailure(error.to_string())
    }
}
