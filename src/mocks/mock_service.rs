//! Recording `UserService` double for controller tests
//!
//! Every call is recorded with its arguments; the configured outcome is
//! returned regardless of input.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

use crate::auth::models::AuthUser;
use crate::types::ApiError;
use crate::user::dto::{
    ChangeProfileStatusRequest, CreateAdminRequest, CreateUserRequest, Paginated, PaginationMeta,
    PaginationOptions, UpdateProfileRequest, UserFilters,
};
use crate::user::models::{UserProfile, UserRole, UserStatus};
use crate::user::service::UserService;

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    CreateAdmin(CreateAdminRequest),
    CreateUser(CreateUserRequest),
    GetAllFromDb(UserFilters, PaginationOptions),
    ChangeProfileStatus(String, ChangeProfileStatusRequest),
    GetMyProfile(AuthUser),
    UpdateMyProfile(AuthUser, UpdateProfileRequest),
}

#[derive(Debug, Default)]
pub struct MockUserService {
    profile: Option<UserProfile>,
    page: Option<Paginated<UserProfile>>,
    error: Option<ApiError>,
    calls: Mutex<Vec<RecordedCall>>,
}

/// Deterministic profile for assertions
pub fn sample_profile(email: &str) -> UserProfile {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_else(Utc::now);
    UserProfile {
        id: Uuid::new_v4(),
        email: email.to_string(),
        name: "Sample User".to_string(),
        contact_number: None,
        profile_photo: None,
        role: UserRole::User,
        status: UserStatus::Active,
        need_password_change: false,
        created_at: at,
        updated_at: at,
    }
}

impl MockUserService {
    pub fn returning_profile(profile: UserProfile) -> Self {
        Self {
            profile: Some(profile),
            ..Self::default()
        }
    }

    pub fn returning_page(page: Paginated<UserProfile>) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call);
    }

    fn profile_outcome(&self) -> Result<UserProfile, ApiError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        self.profile
            .clone()
            .ok_or_else(|| ApiError::Internal("mock has no profile configured".to_string()))
    }

    fn page_outcome(&self) -> Result<Paginated<UserProfile>, ApiError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        Ok(self.page.clone().unwrap_or(Paginated {
            meta: PaginationMeta {
                page: 1,
                limit: 10,
                total: 0,
            },
            data: Vec::new(),
        }))
    }
}

#[async_trait]
impl UserService for MockUserService {
    async fn create_admin(&self, req: CreateAdminRequest) -> Result<UserProfile, ApiError> {
        self.record(RecordedCall::CreateAdmin(req));
        self.profile_outcome()
    }

    async fn create_user(&self, req: CreateUserRequest) -> Result<UserProfile, ApiError> {
        self.record(RecordedCall::CreateUser(req));
        self.profile_outcome()
    }

    async fn get_all_from_db(
        &self,
        filters: UserFilters,
        options: PaginationOptions,
    ) -> Result<Paginated<UserProfile>, ApiError> {
        self.record(RecordedCall::GetAllFromDb(filters, options));
        self.page_outcome()
    }

    async fn change_profile_status(
        &self,
        id: String,
        body: ChangeProfileStatusRequest,
    ) -> Result<UserProfile, ApiError> {
        self.record(RecordedCall::ChangeProfileStatus(id, body));
        self.profile_outcome()
    }

    async fn get_my_profile(&self, user: &AuthUser) -> Result<UserProfile, ApiError> {
        self.record(RecordedCall::GetMyProfile(user.clone()));
        self.profile_outcome()
    }

    async fn update_my_profile(
        &self,
        user: &AuthUser,
        req: UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        self.record(RecordedCall::UpdateMyProfile(user.clone(), req));
        self.profile_outcome()
    }
}
