use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use tracing::debug;

use crate::{
    application::{error::AuthError, repositories::user_repository::UserRepository},
    domain::models::{claims::Claims, user::User},
};

#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Verifies a bearer token and resolves its subject to a user.
    async fn validate(&self, token: &str) -> Result<User, AuthError>;
}

/// HS256 validator keyed by the startup signing secret.
pub struct JwtTokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    user_repository: Arc<dyn UserRepository>,
}

impl JwtTokenValidator {
    pub fn new(secret: &str, user_repository: Arc<dyn UserRepository>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            user_repository,
        }
    }

    fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            debug!("Token rejected by decoder: {}", e);
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidSignature,
            }
        })?;

        // The decoder accepts exp == now; a token is only valid strictly before exp.
        if data.claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::Expired);
        }

        Ok(data.claims)
    }
}

#[async_trait]
impl TokenValidator for JwtTokenValidator {
    async fn validate(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.verify(token)?;

        let user = self
            .user_repository
            .find_user(claims.sub)
            .await
            .map_err(|e| AuthError::Lookup(e.to_string()))?
            .ok_or(AuthError::UnknownSubject(claims.sub))?;

        debug!("Token validated for user {}", user.id);
        Ok(user)
    }
}
