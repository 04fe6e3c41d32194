//! User domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// User role enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    #[default]
    User,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::SuperAdmin => write!(f, "SUPER_ADMIN"),
            UserRole::Admin => write!(f, "ADMIN"),
            UserRole::User => write!(f, "USER"),
        }
    }
}

/// User account status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Active,
    Blocked,
    Deleted,
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStatus::Active => write!(f, "ACTIVE"),
            UserStatus::Blocked => write!(f, "BLOCKED"),
            UserStatus::Deleted => write!(f, "DELETED"),
        }
    }
}

/// Stored user account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub contact_number: Option<String>,
    pub profile_photo: Option<String>,

    #[serde(skip_serializing)]
    pub password_hash: String,

    pub role: UserRole,
    pub status: UserStatus,
    pub need_password_change: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the user is active
    pub fn is_active(&self) -> bool {
        matches!(self.status, UserStatus::Active)
    }
}

/// Public view of a user, as returned in response envelopes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub contact_number: Option<String>,
    pub profile_photo: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub need_password_change: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            contact_number: user.contact_number,
            profile_photo: user.profile_photo,
            role: user.role,
            status: user.status,
            need_password_change: user.need_password_change,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
