//! Application wiring shared by the binary and the integration tests

use actix_web::web;
use std::sync::Arc;

use crate::auth::routes::configure_auth_routes;
use crate::auth::service::AuthService;
use crate::health::health_check;
use crate::user::routes::configure_user_routes;
use crate::user::service::UserService;
use crate::utils::error_handler::ApiErrorHandler;

pub const API_PREFIX: &str = "/api/v1";

/// Register app data, extractor error hooks and every route.
///
/// Middleware (CORS, logging, JWT) is left to the caller so tests can pick
/// what they need.
pub fn configure_app(
    user_service: Arc<dyn UserService>,
    auth_service: Arc<AuthService>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::from(user_service))
            .app_data(web::Data::from(auth_service))
            .app_data(ApiErrorHandler::json_config())
            .app_data(ApiErrorHandler::query_config())
            .app_data(ApiErrorHandler::path_config())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope(API_PREFIX)
                    .service(configure_user_routes())
                    .service(configure_auth_routes()),
            );
    }
}
