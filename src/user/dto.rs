//! User Data Transfer Objects
//!
//! Request bodies, listing query parameters and paginated results for the
//! user endpoints. Field names are camelCase on the wire.

use crate::user::models::UserStatus;
use serde::{Deserialize, Serialize};

/// Profile fields supplied when an account is created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub profile_photo: Option<String>,
}

/// Create admin request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateAdminRequest {
    pub password: String,
    pub admin: NewProfile,
}

/// Create user request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserRequest {
    pub password: String,
    pub user: NewProfile,
}

/// Change profile status request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeProfileStatusRequest {
    pub status: UserStatus,
}

/// Update my profile request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub contact_number: Option<String>,
    pub profile_photo: Option<String>,
}

/// Filterable fields for the user listing
///
/// Only these query parameters narrow a listing; anything else in the query
/// string is dropped during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserFilters {
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub search_term: Option<String>,
}

/// Pagination and sorting options for the user listing
///
/// Values are kept as received; the service decides how to interpret them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOptions {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Pagination metadata attached to listing responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

/// A page of results plus its metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub meta: PaginationMeta,
    pub data: Vec<T>,
}
