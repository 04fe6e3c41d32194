//! API Error Handler
//!
//! Centralized error handling for the app. Handlers return `ApiError`
//! unchanged and actix-web dispatches it here through `ResponseError`, which
//! picks the status code and renders the error envelope:
//!
//! ```json
//! { "success": false, "message": "...", "errorDetails": { "code": "...", "title": "..." } }
//! ```
//!
//! Extractor failures (bad JSON body, query string or path) are converted to
//! `ApiError::BadRequest` so they share the same envelope.

use crate::types::ApiError;
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use log::{error, warn};
use serde::{Deserialize, Serialize};

/// Error response body
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error_details: ErrorDetails,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetails {
    pub code: String,
    pub title: String,
}

/// Error handler for API responses
pub struct ApiErrorHandler;

impl ApiErrorHandler {
    /// Map an ApiError to its HTTP status
    pub fn convert_to_status(error: &ApiError) -> StatusCode {
        match error {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::EmailAlreadyExists => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-friendly error title
    pub fn get_error_title(error: &ApiError) -> &'static str {
        match error {
            ApiError::BadRequest(_) => "Bad Request",
            ApiError::Validation(_) => "Validation Error",
            ApiError::Unauthorized(_) => "Unauthorized",
            ApiError::Forbidden(_) => "Forbidden",
            ApiError::UserNotFound => "User Not Found",
            ApiError::EmailAlreadyExists => "Email Already Exists",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }

    pub fn to_error_response(error: &ApiError) -> ErrorResponse {
        ErrorResponse {
            success: false,
            message: error.to_string(),
            error_details: ErrorDetails {
                code: error.error_code().to_string(),
                title: Self::get_error_title(error).to_string(),
            },
        }
    }

    /// Extractor error hooks, registered as app data so bad input reaches
    /// clients in the same envelope as service errors.
    pub fn json_config() -> web::JsonConfig {
        web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            ApiError::BadRequest(err.to_string()).into()
        })
    }

    pub fn query_config() -> web::QueryConfig {
        web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
            ApiError::BadRequest(err.to_string()).into()
        })
    }

    pub fn path_config() -> web::PathConfig {
        web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
            ApiError::BadRequest(err.to_string()).into()
        })
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        ApiErrorHandler::convert_to_status(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {self}");
        } else {
            warn!("Request rejected ({}): {self}", status.as_u16());
        }

        HttpResponse::build(status).json(ApiErrorHandler::to_error_response(self))
    }
}
