//! Caller identity
//!
//! `AuthUser` is the authenticated-user record the JWT middleware attaches to
//! a request. Handlers that need it take it as an explicit argument.

use crate::types::ApiError;
use crate::user::models::UserRole;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = req.extensions().get::<AuthUser>().cloned();
        ready(identity.ok_or_else(|| ApiError::Unauthorized("You are not authorized".to_string())))
    }
}
