//! Type definitions for user_api
//!
//! Contains the shared error types and configuration models used throughout
//! the app.

use std::time::Duration;
use thiserror::Error;

/// Application startup errors
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Seed error: {0}")]
    Seed(String),
    #[error("Server binding error: {0}")]
    ServerBind(String),
}

/// Runtime API errors
///
/// Every failure raised below the controller is one of these. Handlers never
/// inspect them; they travel unchanged to the `ResponseError` impl in
/// `utils::error_handler`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::UserNotFound => "USER_NOT_FOUND",
            ApiError::EmailAlreadyExists => "EMAIL_EXISTS",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Complete app configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub cors_origins: Vec<String>,
    pub seed_admin: Option<SeedAdminConfig>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Token signing configuration
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in: Duration,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<hidden>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Super admin account created at startup when both variables are set
#[derive(Clone)]
pub struct SeedAdminConfig {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SeedAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedAdminConfig")
            .field("email", &self.email)
            .field("password", &"<hidden>")
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expires_in: Duration::from_secs(3600),
        }
    }
}
