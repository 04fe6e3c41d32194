//! Data Transfer Objects (DTOs) for authentication module

use serde::{Deserialize, Serialize};

/// Login request DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub need_password_change: bool,
}
