use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use wl_core::repositories::UserRepository;
use wl_shared::ApiResponse;

use crate::dto::{LoginRequest, TokenResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

use super::client_ip;

/// Handler for POST /api/v1/auth/login
///
/// Verifies email/password credentials and issues an access/refresh token
/// pair. The rate limit is checked before the body is validated so that
/// malformed requests also count against the caller's window.
///
/// # Responses
/// - 200: token pair with embedded user summary
/// - 400: malformed request body
/// - 401: unknown email or wrong password (indistinguishable)
/// - 403: account is inactive
/// - 429: rate limit exceeded for this client IP
pub async fn login<U>(
    req: HttpRequest,
    state: web::Data<AppState<U>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    let ip = client_ip(&req);

    if !state.rate_limiter.try_consume(&ip) {
        log::warn!("Rate limit exceeded for login from {}", ip);
        return HttpResponse::TooManyRequests().json(ApiResponse::<()>::error(
            "Too many requests. Please try again later.",
            "RATE_LIMIT_EXCEEDED",
        ));
    }

    if let Err(errors) = request.0.validate() {
        return validation_error_response(errors);
    }

    log::info!("Login attempt for {} from {}", request.email, ip);

    match state.auth_service.login(request.into_inner().into()).await {
        Ok(pair) => HttpResponse::Ok().json(ApiResponse::success(TokenResponse::from(pair))),
        Err(error) => handle_domain_error(error),
    }
}
