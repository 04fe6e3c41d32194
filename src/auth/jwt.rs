//! JWT token management
//!
//! Handles creation and validation of the bearer tokens that carry the
//! caller identity.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::auth::models::AuthUser;
use crate::types::{ApiError, JwtConfig};
use crate::user::models::UserRole;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: Duration,
}

// Keys stay out of logs
impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("encoding_key", &"<hidden>")
            .field("decoding_key", &"<hidden>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl JwtService {
    pub fn new(secret: &str, expires_in: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, config.expires_in)
    }

    pub fn generate_token(&self, user: &AuthUser) -> Result<String, ApiError> {
        let now = Utc::now().timestamp();
        let lifetime = i64::try_from(self.expires_in.as_secs()).unwrap_or(i64::MAX);

        let claims = Claims {
            sub: user.user_id,
            email: user.email.clone(),
            role: user.role,
            iat: now,
            exp: now.saturating_add(lifetime),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("Failed to generate an access token: {e}")))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, ApiError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    ApiError::Unauthorized("Token expired".to_string())
                },
                _ => ApiError::Unauthorized("Invalid token".to_string()),
            })
    }
}
