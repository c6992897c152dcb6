//! Domain error to HTTP response mapping

use actix_web::HttpResponse;

use wl_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use wl_shared::ApiResponse;

/// Convert a domain error into an HTTP error envelope
///
/// Database and internal failures are logged in full but answered with a
/// generic message so internals never leak to clients.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let code = error.code().to_string();

    match &error {
        DomainError::Auth(AuthError::InvalidCredentials) => {
            HttpResponse::Unauthorized().json(ApiResponse::<()>::error(error.to_string(), code))
        }
        DomainError::Auth(AuthError::AccountInactive)
        | DomainError::Auth(AuthError::InsufficientPermissions) => {
            HttpResponse::Forbidden().json(ApiResponse::<()>::error(error.to_string(), code))
        }
        DomainError::Token(TokenError::GenerationFailed { .. }) => {
            log::error!("Token generation failed: {:?}", error);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("An internal error occurred", code))
        }
        DomainError::Token(_) => {
            HttpResponse::Unauthorized().json(ApiResponse::<()>::error(error.to_string(), code))
        }
        DomainError::Validation(ValidationError::DuplicateEmail { .. }) => {
            HttpResponse::Conflict().json(ApiResponse::<()>::error(error.to_string(), code))
        }
        DomainError::Validation(_) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(error.to_string(), code))
        }
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(error.to_string(), code))
        }
        DomainError::NotImplemented { .. } => {
            HttpResponse::NotImplemented().json(ApiResponse::<()>::error(error.to_string(), code))
        }
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            log::error!("Internal error: {:?}", error);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("An internal error occurred", code))
        }
    }
}

/// 400 envelope for request body/query validation failures
pub fn validation_error_response(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(
        format!("Invalid request data: {}", errors),
        "VALIDATION_ERROR",
    ))
}
