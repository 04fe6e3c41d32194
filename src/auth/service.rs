//! Credential login
//!
//! Checks an email/password pair against the user store and issues the
//! bearer token the JWT middleware later turns back into an `AuthUser`.

use log::{info, warn};
use std::sync::Arc;

use crate::auth::dto::{LoginRequest, LoginResponse};
use crate::auth::jwt::JwtService;
use crate::auth::models::AuthUser;
use crate::types::ApiError;
use crate::user::models::UserStatus;
use crate::user::repository::UserRepository;
use crate::utils::password::PasswordService;

pub struct AuthService {
    repo: Arc<dyn UserRepository>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(repo: Arc<dyn UserRepository>, jwt_service: JwtService) -> Self {
        Self {
            repo,
            jwt_service,
        }
    }

    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, ApiError> {
        let invalid = || ApiError::Unauthorized("Invalid email or password".to_string());

        let user = self.repo.find_by_email(&req.email).await?.ok_or_else(invalid)?;

        if !PasswordService::verify_password(&req.password, &user.password_hash)? {
            warn!("Failed login attempt for {}", user.email);
            return Err(invalid());
        }

        if user.status != UserStatus::Active {
            warn!("Login refused for {} account {}", user.status, user.email);
            return Err(ApiError::Forbidden(format!("Account is {}", user.status)));
        }

        let access_token = self.jwt_service.generate_token(&AuthUser {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
        })?;

        info!("User {} logged in", user.id);
        Ok(LoginResponse {
            access_token,
            need_password_change: user.need_password_change,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::dto::{ChangeProfileStatusRequest, CreateAdminRequest, NewProfile};
    use crate::user::repository::InMemoryUserRepository;
    use crate::user::service::{InMemoryUserService, UserService};
    use std::time::Duration;

    async fn setup() -> (AuthService, InMemoryUserService, JwtService) {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let jwt = JwtService::new("auth_secret", Duration::from_secs(300));
        let users = InMemoryUserService::new(Arc::clone(&repo));
        users
            .create_admin(CreateAdminRequest {
                password: "admin123".to_string(),
                admin: NewProfile {
                    name: "Admin".to_string(),
                    email: "admin@example.com".to_string(),
                    contact_number: None,
                    profile_photo: None,
                },
            })
            .await
            .unwrap();
        (AuthService::new(repo, jwt.clone()), users, jwt)
    }

    fn credentials(password: &str) -> LoginRequest {
        LoginRequest {
            email: "admin@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_token_for_identity() {
        let (auth, _, jwt) = setup().await;

        let resp = auth.login(credentials("admin123")).await.unwrap();
        let claims = jwt.validate_token(&resp.access_token).unwrap();

        assert!(resp.need_password_change);
        assert_eq!(claims.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email() {
        let (auth, _, _) = setup().await;

        assert!(matches!(auth.login(credentials("nope")).await, Err(ApiError::Unauthorized(_))));

        let unknown = LoginRequest {
            email: "ghost@example.com".to_string(),
            password: "admin123".to_string(),
        };
        assert!(matches!(auth.login(unknown).await, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_blocked_account_is_forbidden() {
        let (auth, users, jwt) = setup().await;
        let token = auth.login(credentials("admin123")).await.unwrap().access_token;
        let id = jwt.validate_token(&token).unwrap().sub;

        users
            .change_profile_status(
                id.to_string(),
                ChangeProfileStatusRequest {
                    status: UserStatus::Blocked,
                },
            )
            .await
            .unwrap();

        assert!(matches!(auth.login(credentials("admin123")).await, Err(ApiError::Forbidden(_))));
    }
}
