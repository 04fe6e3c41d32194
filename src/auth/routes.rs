//! Authentication routes

use crate::auth::handlers;
use actix_web::{web, Scope};

pub fn configure_auth_routes() -> Scope {
    web::scope("/auth").route("/login", web::post().to(handlers::login))
}
