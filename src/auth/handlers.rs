use actix_web::web;

use crate::auth::dto::{LoginRequest, LoginResponse};
use crate::auth::service::AuthService;
use crate::types::ApiError;
use crate::utils::response_handler::ApiResponse;

pub const LOGGED_IN: &str = "Logged in successfully!";

pub async fn login(
    service: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> Result<ApiResponse<LoginResponse>, ApiError> {
    let result = service.login(body.into_inner()).await?;
    Ok(ApiResponse::ok(LOGGED_IN, result))
}
