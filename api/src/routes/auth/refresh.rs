use actix_web::{web, HttpRequest, HttpResponse};

use wl_core::repositories::UserRepository;
use wl_shared::ApiResponse;

use crate::handlers::handle_domain_error;
use crate::routes::AppState;

use super::client_ip;

/// Handler for POST /api/v1/auth/refresh
///
/// The request body is the raw refresh token string, not a JSON object.
/// The token is validated, but rotation is not built yet, so a token
/// that passes validation still ends in a 501 rather than a new pair.
/// Shares the per-client-IP rate limit with login.
///
/// # Responses
/// - 401: missing, malformed, expired, or wrong-type token
/// - 429: rate limit exceeded for this client IP
/// - 501: token is valid but rotation is not implemented
pub async fn refresh<U>(
    req: HttpRequest,
    state: web::Data<AppState<U>>,
    body: String,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    let ip = client_ip(&req);

    if !state.rate_limiter.try_consume(&ip) {
        log::warn!("Rate limit exceeded for refresh from {}", ip);
        return HttpResponse::TooManyRequests().json(ApiResponse::<()>::error(
            "Too many requests. Please try again later.",
            "RATE_LIMIT_EXCEEDED",
        ));
    }

    match state.auth_service.refresh_token(body.trim()).await {
        Ok(pair) => HttpResponse::Ok().json(ApiResponse::success(pair)),
        Err(error) => handle_domain_error(error),
    }
}
