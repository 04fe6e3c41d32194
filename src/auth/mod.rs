//! Authentication module
//!
//! Bearer token issuing and verification, and the request-scoped caller
//! identity the user endpoints rely on.

pub mod dto;
pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

pub use jwt::JwtService;
pub use middleware::JwtMiddleware;
pub use models::AuthUser;
