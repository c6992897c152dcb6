use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use wl_api::app::create_app;
use wl_api::routes::AppState;
use wl_core::services::auth::{AuthService, FixedWindowRateLimiter};
use wl_core::services::token::{TokenService, TokenServiceConfig};
use wl_core::services::user::UserService;
use wl_infra::{create_pool, MySqlUserRepository};
use wl_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Worklog API server");

    let config = AppConfig::from_env();
    if config.jwt.is_using_default_secret() {
        log::warn!("JWT_SECRET is not set; using the built-in development secret");
    }

    let pool = create_pool(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;
    info!("Database pool ready");

    let user_repository = Arc::new(MySqlUserRepository::new(pool));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
    let rate_limiter = Arc::new(FixedWindowRateLimiter::new(config.rate_limit.clone()));

    let app_state = web::Data::new(AppState {
        auth_service,
        user_service,
        rate_limiter,
    });

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), Arc::clone(&token_service))
    })
    .bind(&bind_address)?;

    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await?;
    Ok(())
}
