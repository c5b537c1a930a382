use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{
    application::{
        error::{ApplicationError, AuthError},
        services::TokenValidator,
    },
    domain::models::user::User,
};

const BEARER: &str = "Bearer";

/// The caller resolved by [`require_auth`], stored in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Reads the token from `Authorization: Bearer <token>`.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER) {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

pub async fn authenticate(
    validator: &dyn TokenValidator,
    headers: &HeaderMap,
) -> Result<User, AuthError> {
    let token = extract_bearer(headers).ok_or(AuthError::MissingToken)?;
    validator.validate(token).await
}

/// Rejects the request before it reaches a handler unless it carries a valid token.
pub async fn require_auth(
    State(validator): State<Arc<dyn TokenValidator>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApplicationError> {
    let user = authenticate(validator.as_ref(), request.headers()).await?;
    debug!("Request authenticated as user {}", user.id);
    request.extensions_mut().insert(AuthenticatedUser(user));
    Ok(next.run(request).await)
}
