//! User controller
//!
//! Adapts HTTP requests to `UserService` calls and wraps the results in the
//! success envelope. No validation or error recovery happens here: every
//! service error is returned as-is and rendered by the central handler.

use actix_web::web;
use log::debug;

use crate::auth::models::AuthUser;
use crate::types::ApiError;
use crate::user::dto::{
    ChangeProfileStatusRequest, CreateAdminRequest, CreateUserRequest, PaginationOptions,
    UpdateProfileRequest, UserFilters,
};
use crate::user::models::UserProfile;
use crate::user::service::UserService;
use crate::utils::response_handler::ApiResponse;

pub const ADMIN_CREATED: &str = "Admin Created successfully!";
pub const USER_CREATED: &str = "User Created successfully!";
pub const USERS_FETCHED: &str = "Users data fetched!";
pub const PROFILE_STATUS_CHANGED: &str = "Users profile status changed!";
pub const MY_PROFILE_FETCHED: &str = "My profile data fetched!";
pub const MY_PROFILE_UPDATED: &str = "My profile updated!";

type UserResult<T> = Result<ApiResponse<T>, ApiError>;

pub async fn create_admin(
    service: web::Data<dyn UserService>,
    body: web::Json<CreateAdminRequest>,
) -> UserResult<UserProfile> {
    let result = service.create_admin(body.into_inner()).await?;
    Ok(ApiResponse::ok(ADMIN_CREATED, result))
}

pub async fn create_user(
    service: web::Data<dyn UserService>,
    body: web::Json<CreateUserRequest>,
) -> UserResult<UserProfile> {
    let result = service.create_user(body.into_inner()).await?;
    Ok(ApiResponse::ok(USER_CREATED, result))
}

/// Only the allowlisted filter fields and the pagination keys survive query
/// extraction; other parameters never reach the service.
pub async fn get_all_from_db(
    service: web::Data<dyn UserService>,
    filters: web::Query<UserFilters>,
    options: web::Query<PaginationOptions>,
) -> UserResult<Vec<UserProfile>> {
    debug!("Listing users with {:?} / {:?}", filters.0, options.0);

    let result = service.get_all_from_db(filters.into_inner(), options.into_inner()).await?;
    Ok(ApiResponse::ok(USERS_FETCHED, result.data).with_meta(result.meta))
}

pub async fn change_profile_status(
    service: web::Data<dyn UserService>,
    id: web::Path<String>,
    body: web::Json<ChangeProfileStatusRequest>,
) -> UserResult<UserProfile> {
    let result = service.change_profile_status(id.into_inner(), body.into_inner()).await?;
    Ok(ApiResponse::ok(PROFILE_STATUS_CHANGED, result))
}

pub async fn get_my_profile(
    service: web::Data<dyn UserService>,
    user: AuthUser,
) -> UserResult<UserProfile> {
    let result = service.get_my_profile(&user).await?;
    Ok(ApiResponse::ok(MY_PROFILE_FETCHED, result))
}

pub async fn update_my_profile(
    service: web::Data<dyn UserService>,
    user: AuthUser,
    body: web::Json<UpdateProfileRequest>,
) -> UserResult<UserProfile> {
    let result = service.update_my_profile(&user, body.into_inner()).await?;
    Ok(ApiResponse::ok(MY_PROFILE_UPDATED, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::mock_service::{sample_profile, MockUserService, RecordedCall};
    use crate::user::models::UserRole;
    use std::sync::Arc;
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_create_user_wraps_result() {
        let profile = sample_profile("new@example.com");
        let mock = Arc::new(MockUserService::returning_profile(profile.clone()));
        let service: Arc<dyn UserService> = mock.clone();

        let body = CreateUserRequest {
            password: "secret".to_string(),
            user: crate::user::dto::NewProfile {
                name: "New".to_string(),
                email: "new@example.com".to_string(),
                contact_number: None,
                profile_photo: None,
            },
        };
        let resp =
            create_user(web::Data::from(service), web::Json(body.clone())).await.unwrap();

        assert!(resp.success);
        assert_eq!(resp.message, USER_CREATED);
        assert_eq!(resp.data, profile);
        assert_eq!(resp.meta, None);
        assert_eq!(mock.calls(), vec![RecordedCall::CreateUser(body)]);
    }

    #[actix_web::test]
    async fn test_get_my_profile_forwards_identity() {
        let profile = sample_profile("me@example.com");
        let mock = Arc::new(MockUserService::returning_profile(profile.clone()));
        let service: Arc<dyn UserService> = mock.clone();
        let me = AuthUser {
            user_id: Uuid::new_v4(),
            email: "me@example.com".to_string(),
            role: UserRole::User,
        };

        let resp = get_my_profile(web::Data::from(service), me.clone()).await.unwrap();

        assert_eq!(resp.message, MY_PROFILE_FETCHED);
        assert_eq!(mock.calls(), vec![RecordedCall::GetMyProfile(me)]);
    }

    #[actix_web::test]
    async fn test_service_error_is_returned_unchanged() {
        let mock = Arc::new(MockUserService::failing(ApiError::EmailAlreadyExists));
        let service: Arc<dyn UserService> = mock.clone();
        let me = AuthUser {
            user_id: Uuid::new_v4(),
            email: "me@example.com".to_string(),
            role: UserRole::Admin,
        };

        let err = update_my_profile(
            web::Data::from(service),
            me,
            web::Json(UpdateProfileRequest::default()),
        )
        .await
        .unwrap_err();

        assert_eq!(err, ApiError::EmailAlreadyExists);
    }
}
