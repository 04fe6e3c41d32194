//! User API
//!
//! User management HTTP service built with Actix-web: account creation,
//! paginated listing, profile status changes and self-service profile
//! endpoints, authenticated with bearer JWTs.

pub mod app;
pub mod auth;
pub mod config;
pub mod health;
pub mod mocks;
pub mod types;
pub mod user;
pub mod utils;

// Re-export commonly used types and functions
pub use app::{configure_app, API_PREFIX};
pub use types::{ApiError, AppConfig, StartupError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_NAME: &str = "user-api";
