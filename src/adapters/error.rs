use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::error::{ApplicationError, StoreError};

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApplicationError::BadRequest(ref msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "Bad request")
            }
            ApplicationError::Unauthorized(ref cause) => {
                // Every auth failure looks the same to the caller.
                warn!("Unauthorized request: {}", cause);
                let body = Json(json!({ "error": "Unauthorized" }));
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    body,
                )
                    .into_response();
            }
            ApplicationError::StoreFailure(ref msg) => {
                error!("Store failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match error.as_database_error() {
            Some(db_error) if db_error.is_unique_violation() => StoreError::DuplicateKey,
            _ => StoreError::Failure(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::AuthError;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn auth_failures_share_one_response() {
        let mut bodies = Vec::new();
        for cause in [
            AuthError::MissingToken,
            AuthError::InvalidSignature,
            AuthError::Expired,
            AuthError::UnknownSubject(3),
        ] {
            let response = ApplicationError::Unauthorized(cause).into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");
            bodies.push(body_of(response).await);
        }
        assert!(bodies.iter().all(|b| b == &bodies[0]));
        assert_eq!(bodies[0]["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn store_failures_are_opaque() {
        let response =
            ApplicationError::StoreFailure("relation \"likes\" does not exist".into())
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await["error"], "Internal server error");
    }

    #[test]
    fn pool_errors_become_store_failures() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::Failure(_)));
    }
}
