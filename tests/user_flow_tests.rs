use actix_web::http::{header::AUTHORIZATION, StatusCode};
use actix_web::{test, App};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use user_api::auth::service::AuthService;
use user_api::auth::{JwtMiddleware, JwtService};
use user_api::configure_app;
use user_api::user::repository::{InMemoryUserRepository, UserRepository};
use user_api::user::service::{InMemoryUserService, UserService};

const SECRET: &str = "flow_test_secret";

macro_rules! seeded_app {
    () => {{
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let jwt = JwtService::new(SECRET, Duration::from_secs(600));
        let users = InMemoryUserService::new(Arc::clone(&repo));
        users.seed_super_admin("root@example.com", "rootpass").await.unwrap();

        let user_service: Arc<dyn UserService> = Arc::new(users);
        let auth_service = Arc::new(AuthService::new(repo, jwt.clone()));
        test::init_service(
            App::new()
                .wrap(JwtMiddleware::new(jwt))
                .configure(configure_app(user_service, auth_service)),
        )
        .await
    }};
}

macro_rules! login {
    ($app:expr, $email:expr, $password:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": $email, "password": $password}))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        format!("Bearer {}", body["data"]["accessToken"].as_str().unwrap())
    }};
}

#[actix_web::test]
async fn test_integration_register_login_and_manage_profile() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/users/create-user")
        .set_json(json!({
            "password": "alicepass",
            "user": {"name": "Alice", "email": "alice@example.com", "contactNumber": "0101"}
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["message"], "User Created successfully!");
    assert_eq!(created["data"]["role"], "USER");
    assert!(created["data"].get("passwordHash").is_none());

    let token = login!(app, "alice@example.com", "alicepass");

    let req = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header((AUTHORIZATION, token.clone()))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["data"]["email"], "alice@example.com");

    let req = test::TestRequest::patch()
        .uri("/api/v1/users/update-my-profile")
        .insert_header((AUTHORIZATION, token))
        .set_json(json!({"name": "Alice Liddell"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["message"], "My profile updated!");
    assert_eq!(updated["data"]["name"], "Alice Liddell");
    assert_eq!(updated["data"]["contactNumber"], "0101");
}

#[actix_web::test]
async fn test_integration_blocked_user_loses_access() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/users/create-user")
        .set_json(json!({"password": "bobpass", "user": {"name": "Bob", "email": "bob@example.com"}}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let bob_id = created["data"]["id"].as_str().unwrap().to_string();
    let bob_token = login!(app, "bob@example.com", "bobpass");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/users/{bob_id}/status"))
        .set_json(json!({"status": "BLOCKED"}))
        .to_request();
    let changed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(changed["message"], "Users profile status changed!");
    assert_eq!(changed["data"]["status"], "BLOCKED");

    let req = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header((AUTHORIZATION, bob_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "bob@example.com", "password": "bobpass"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_integration_listing_paginates_and_filters() {
    let app = seeded_app!();

    for (name, email) in [("Ann", "ann@corp.io"), ("Ben", "ben@corp.io"), ("Cat", "cat@home.io")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/users/create-user")
            .set_json(json!({"password": "pw", "user": {"name": name, "email": email}}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/users?searchTerm=corp&sortBy=name&sortOrder=asc&limit=1&page=1")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["meta"], json!({"page": 1, "limit": 1, "total": 2}));
    assert_eq!(page["data"][0]["name"], "Ann");

    let req = test::TestRequest::get().uri("/api/v1/users?role=SUPER_ADMIN").to_request();
    let admins: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(admins["meta"]["total"], 1);
    assert_eq!(admins["data"][0]["email"], "root@example.com");
}

#[actix_web::test]
async fn test_integration_duplicate_and_invalid_accounts_are_rejected() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/users/create-admin")
        .set_json(json!({"password": "x", "admin": {"name": "Root", "email": "ROOT@example.com"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::patch()
        .uri("/api/v1/users/not-a-uuid/status")
        .set_json(json!({"status": "ACTIVE"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_integration_health_endpoint_is_public() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "user-api");
}
