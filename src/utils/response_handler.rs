//! Success response envelope
//!
//! Every successful handler answers with the same JSON shape:
//!
//! ```json
//! { "success": true, "message": "...", "meta": { ... }, "data": ... }
//! ```
//!
//! `meta` is only present for paginated results. The status code drives the
//! HTTP status line and is not repeated in the body.

use crate::user::dto::PaginationMeta;
use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(skip)]
    pub status_code: StatusCode,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PaginationMeta>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// 200 OK envelope
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: StatusCode::OK,
            success: true,
            message: message.into(),
            meta: None,
            data,
        }
    }

    pub fn with_meta(mut self, meta: PaginationMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(self.status_code).json(&self)
    }
}
