//! User management routes

use crate::user::user_controller;
use actix_web::{web, Scope};

/// Configure user management routes
pub fn configure_user_routes() -> Scope {
    web::scope("/users")
        .route("/create-admin", web::post().to(user_controller::create_admin))
        .route("/create-user", web::post().to(user_controller::create_user))
        .route("/me", web::get().to(user_controller::get_my_profile))
        .route("/update-my-profile", web::patch().to(user_controller::update_my_profile))
        .route("/{id}/status", web::patch().to(user_controller::change_profile_status))
        .route("", web::get().to(user_controller::get_all_from_db))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::mock_service::MockUserService;
    use crate::user::service::UserService;
    use actix_web::{test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_routes_configuration() {
        let service: Arc<dyn UserService> = Arc::new(MockUserService::default());
        let app = test::init_service(
            App::new().app_data(web::Data::from(service)).service(configure_user_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::delete().uri("/users/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let req = test::TestRequest::get().uri("/users/unknown").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
