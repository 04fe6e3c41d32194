//! Configuration management for user_api
//!
//! Loads the app configuration from environment variables with sensible
//! defaults, then validates it.

use crate::types::{AppConfig, JwtConfig, SeedAdminConfig, ServerConfig, StartupError};
use std::env;
use std::time::Duration;

const DEFAULT_JWT_EXPIRES_IN_SECS: u64 = 3600;

/// Load complete app configuration
pub fn load_config() -> Result<AppConfig, StartupError> {
    let config = AppConfig {
        server: load_server_config()?,
        jwt: load_jwt_config()?,
        cors_origins: load_cors_origins(),
        seed_admin: load_seed_admin(),
    };

    validate_config(&config)?;
    Ok(config)
}

/// Load server configuration
fn load_server_config() -> Result<ServerConfig, StartupError> {
    let defaults = ServerConfig::default();

    let port = match env::var("SERVER_PORT") {
        Ok(raw) => raw
            .parse()
            .map_err(|_| StartupError::Config(format!("SERVER_PORT is not a valid port: {raw}")))?,
        Err(_) => defaults.port,
    };

    Ok(ServerConfig {
        host: env::var("SERVER_HOST").unwrap_or(defaults.host),
        port,
        workers: env::var("SERVER_WORKERS")
            .ok()
            .and_then(|w| w.parse().ok())
            .unwrap_or(defaults.workers),
    })
}

/// Load JWT configuration (secret is required)
fn load_jwt_config() -> Result<JwtConfig, StartupError> {
    let secret = env::var("JWT_SECRET")
        .map_err(|_| StartupError::Config("JWT_SECRET must be set".to_string()))?;

    let expires_in = env::var("JWT_EXPIRES_IN")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_JWT_EXPIRES_IN_SECS);

    Ok(JwtConfig {
        secret,
        expires_in: Duration::from_secs(expires_in),
    })
}

/// Load allowed CORS origins
fn load_cors_origins() -> Vec<String> {
    parse_origins(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}

/// Load the optional super admin seed
fn load_seed_admin() -> Option<SeedAdminConfig> {
    match (env::var("SUPER_ADMIN_EMAIL"), env::var("SUPER_ADMIN_PASSWORD")) {
        (Ok(email), Ok(password)) => Some(SeedAdminConfig {
            email,
            password,
        }),
        _ => None,
    }
}

fn validate_config(config: &AppConfig) -> Result<(), StartupError> {
    if config.jwt.secret.trim().is_empty() {
        return Err(StartupError::Config("JWT_SECRET can't be empty".to_string()));
    }

    if config.server.port == 0 {
        return Err(StartupError::Config("SERVER_PORT can't be 0".to_string()));
    }

    if config.server.workers == 0 {
        return Err(StartupError::Config("SERVER_WORKERS must be at least 1".to_string()));
    }

    if config.jwt.expires_in.is_zero() {
        return Err(StartupError::Config("JWT_EXPIRES_IN must be positive".to_string()));
    }

    Ok(())
}
