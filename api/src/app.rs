//! Application factory
//!
//! Builds the Actix-web application from shared state. Handlers are
//! generic over the user repository so tests can run against the
//! in-memory mock with the same routing table as the binary.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use wl_core::repositories::UserRepository;
use wl_core::services::token::TokenService;
use wl_shared::ApiResponse;

use crate::middleware::{create_cors, JwtAuth};
use crate::routes::auth::{login, refresh};
use crate::routes::users::{create_user, current_user, get_user_by_id, list_users};
use crate::routes::AppState;

/// Create and configure the application with all routes and middleware
pub fn create_app<U>(
    app_state: web::Data<AppState<U>>,
    token_service: Arc<TokenService>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(login::<U>))
                        .route("/refresh", web::post().to(refresh::<U>)),
                )
                .service(
                    web::scope("/users")
                        .wrap(JwtAuth::new(token_service))
                        .route("", web::get().to(list_users::<U>))
                        .route("", web::post().to(create_user::<U>))
                        .route("/me", web::get().to(current_user::<U>))
                        .route("/{id}", web::get().to(get_user_by_id::<U>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "worklog-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        "The requested resource was not found",
        "NOT_FOUND",
    ))
}
