use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use log::{error, info};
use std::sync::Arc;

use user_api::auth::service::AuthService;
use user_api::auth::{JwtMiddleware, JwtService};
use user_api::config::load_config;
use user_api::user::repository::{InMemoryUserRepository, UserRepository};
use user_api::user::service::{InMemoryUserService, UserService};
use user_api::{configure_app, StartupError, SERVICE_NAME, VERSION};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        error!("{SERVICE_NAME} failed: {e}");
        return Err(std::io::Error::other(e.to_string()));
    }
    Ok(())
}

async fn run() -> Result<(), StartupError> {
    let config = load_config()?;
    info!("Starting {SERVICE_NAME} v{VERSION} on {}", config.server.bind_address());

    let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let users = InMemoryUserService::new(Arc::clone(&repo));

    if let Some(seed) = &config.seed_admin {
        users
            .seed_super_admin(&seed.email, &seed.password)
            .await
            .map_err(|e| StartupError::Seed(e.to_string()))?;
    }

    let jwt_service = JwtService::from_config(&config.jwt);
    let user_service: Arc<dyn UserService> = Arc::new(users);
    let auth_service = Arc::new(AuthService::new(repo, jwt_service.clone()));
    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(JwtMiddleware::new(jwt_service.clone()))
            .wrap(build_cors(&cors_origins))
            .wrap(Logger::default())
            .configure(configure_app(Arc::clone(&user_service), Arc::clone(&auth_service)))
    })
    .workers(config.server.workers)
    .bind(config.server.bind_address())
    .map_err(|e| StartupError::ServerBind(e.to_string()))?
    .run()
    .await
    .map_err(|e| StartupError::ServerBind(e.to_string()))
}

fn build_cors(origins: &[String]) -> Cors {
    if origins.iter().any(|origin| origin == "*") {
        return Cors::permissive();
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
