//! User Service Module
//!
//! Business logic for user management. `UserService` is the seam the
//! controller talks to; `InMemoryUserService` is the implementation the
//! binary runs with, backed by a [`UserRepository`].

use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::models::AuthUser;
use crate::types::ApiError;
use crate::user::dto::{
    ChangeProfileStatusRequest, CreateAdminRequest, CreateUserRequest, NewProfile, Paginated,
    PaginationMeta, PaginationOptions, UpdateProfileRequest, UserFilters,
};
use crate::user::models::{User, UserProfile, UserRole, UserStatus};
use crate::user::repository::UserRepository;
use crate::utils::pagination::{calculate_pagination, SortField, SortOrder};
use crate::utils::password::PasswordService;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_admin(&self, req: CreateAdminRequest) -> Result<UserProfile, ApiError>;

    async fn create_user(&self, req: CreateUserRequest) -> Result<UserProfile, ApiError>;

    async fn get_all_from_db(
        &self,
        filters: UserFilters,
        options: PaginationOptions,
    ) -> Result<Paginated<UserProfile>, ApiError>;

    async fn change_profile_status(
        &self,
        id: String,
        body: ChangeProfileStatusRequest,
    ) -> Result<UserProfile, ApiError>;

    async fn get_my_profile(&self, user: &AuthUser) -> Result<UserProfile, ApiError>;

    async fn update_my_profile(
        &self,
        user: &AuthUser,
        req: UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError>;
}

/// Service for managing user-related operations
pub struct InMemoryUserService {
    repo: Arc<dyn UserRepository>,
}

impl InMemoryUserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            repo,
        }
    }

    /// Create the super admin account unless the email is already registered
    pub async fn seed_super_admin(&self, email: &str, password: &str) -> Result<(), ApiError> {
        if self.repo.find_by_email(email).await?.is_some() {
            info!("Super admin {email} already present, skipping seed");
            return Ok(());
        }

        let profile = NewProfile {
            name: "Super Admin".to_string(),
            email: email.to_string(),
            contact_number: None,
            profile_photo: None,
        };
        self.register(profile, password, UserRole::SuperAdmin, false).await?;
        info!("Seeded super admin {email}");
        Ok(())
    }

    async fn register(
        &self,
        profile: NewProfile,
        password: &str,
        role: UserRole,
        need_password_change: bool,
    ) -> Result<UserProfile, ApiError> {
        Self::validate_new_profile(&profile, password)?;

        let password_hash = PasswordService::hash_password(password)?;
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: profile.email.trim().to_string(),
            name: profile.name.trim().to_string(),
            contact_number: profile.contact_number,
            profile_photo: profile.profile_photo,
            password_hash,
            role,
            status: UserStatus::Active,
            need_password_change,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(user).await?;
        info!("Created {} account {} ({})", created.role, created.id, created.email);
        Ok(created.into())
    }

    fn validate_new_profile(profile: &NewProfile, password: &str) -> Result<(), ApiError> {
        if password.is_empty() {
            return Err(ApiError::Validation("Password is required".to_string()));
        }

        if profile.name.trim().is_empty() {
            return Err(ApiError::Validation("Name is required".to_string()));
        }

        if !EMAIL_RE.is_match(profile.email.trim()) {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }

        Ok(())
    }

    async fn find_active(&self, identity: &AuthUser) -> Result<User, ApiError> {
        match self.repo.find_by_id(identity.user_id).await? {
            Some(user) if user.is_active() => Ok(user),
            _ => Err(ApiError::UserNotFound),
        }
    }

    fn matches_filters(user: &User, filters: &UserFilters) -> bool {
        if let Some(term) = filters.search_term.as_deref().map(str::trim).filter(|t| !t.is_empty())
        {
            let term = term.to_lowercase();
            let hit = user.email.to_lowercase().contains(&term)
                || user.name.to_lowercase().contains(&term)
                || user
                    .contact_number
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        if let Some(email) = filters.email.as_deref() {
            if !user.email.eq_ignore_ascii_case(email) {
                return false;
            }
        }

        if let Some(role) = filters.role.as_deref() {
            if user.role.to_string() != role {
                return false;
            }
        }

        if let Some(status) = filters.status.as_deref() {
            if user.status.to_string() != status {
                return false;
            }
        }

        true
    }

    fn compare(a: &User, b: &User, field: SortField) -> Ordering {
        match field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn create_admin(&self, req: CreateAdminRequest) -> Result<UserProfile, ApiError> {
        self.register(req.admin, &req.password, UserRole::Admin, true).await
    }

    async fn create_user(&self, req: CreateUserRequest) -> Result<UserProfile, ApiError> {
        self.register(req.user, &req.password, UserRole::User, false).await
    }

    async fn get_all_from_db(
        &self,
        filters: UserFilters,
        options: PaginationOptions,
    ) -> Result<Paginated<UserProfile>, ApiError> {
        let page = calculate_pagination(&options);

        let mut users: Vec<User> = self
            .repo
            .all()
            .await?
            .into_iter()
            .filter(|user| Self::matches_filters(user, &filters))
            .collect();

        users.sort_by(|a, b| {
            let ordering = Self::compare(a, b, page.sort_by).then_with(|| a.id.cmp(&b.id));
            match page.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = users.len() as u64;
        let skip = usize::try_from(page.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
        let data = users.into_iter().skip(skip).take(limit).map(UserProfile::from).collect();

        Ok(Paginated {
            meta: PaginationMeta {
                page: page.page,
                limit: page.limit,
                total,
            },
            data,
        })
    }

    async fn change_profile_status(
        &self,
        id: String,
        body: ChangeProfileStatusRequest,
    ) -> Result<UserProfile, ApiError> {
        let user_id = Uuid::parse_str(&id)
            .map_err(|_| ApiError::BadRequest(format!("Invalid user id: {id}")))?;

        let status = body.status;
        let updated = self
            .repo
            .update_with(
                user_id,
                Box::new(move |user| {
                    user.status = status;
                    user.updated_at = Utc::now();
                    Ok(())
                }),
            )
            .await?;
        if updated.status != UserStatus::Active {
            warn!("User {} status changed to {}", updated.id, updated.status);
        } else {
            info!("User {} status changed to {}", updated.id, updated.status);
        }
        Ok(updated.into())
    }

    async fn get_my_profile(&self, user: &AuthUser) -> Result<UserProfile, ApiError> {
        self.find_active(user).await.map(UserProfile::from)
    }

    async fn update_my_profile(
        &self,
        user: &AuthUser,
        req: UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        let name = match req.name {
            Some(name) if name.trim().is_empty() => {
                return Err(ApiError::Validation("Name is required".to_string()));
            },
            name => name.map(|name| name.trim().to_string()),
        };

        let updated = self
            .repo
            .update_with(
                user.user_id,
                Box::new(move |stored| {
                    if !stored.is_active() {
                        return Err(ApiError::UserNotFound);
                    }
                    if let Some(name) = name {
                        stored.name = name;
                    }
                    if let Some(contact_number) = req.contact_number {
                        stored.contact_number = Some(contact_number);
                    }
                    if let Some(profile_photo) = req.profile_photo {
                        stored.profile_photo = Some(profile_photo);
                    }
                    stored.updated_at = Utc::now();
                    Ok(())
                }),
            )
            .await?;
        info!("User {} updated their profile", updated.id);
        Ok(updated.into())
    }
}
