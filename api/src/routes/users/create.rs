use actix_web::{web, HttpResponse};
use validator::Validate;

use wl_core::errors::AuthError;
use wl_core::repositories::UserRepository;
use wl_shared::ApiResponse;

use crate::dto::{CreateUserRequest, UserResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for POST /api/v1/users
///
/// Creates a user with a bcrypt-hashed password. Admin only.
///
/// # Responses
/// - 200: the created user (without credential material)
/// - 400: malformed request body
/// - 403: caller is not an admin
/// - 409: email already registered
pub async fn create_user<U>(
    auth: AuthContext,
    state: web::Data<AppState<U>>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if !auth.role.is_admin() {
        return handle_domain_error(AuthError::InsufficientPermissions.into());
    }

    if let Err(errors) = request.0.validate() {
        return validation_error_response(errors);
    }

    log::info!("Admin {} creating user {}", auth.user_id, request.email);

    match state.user_service.create_user(request.into_inner().into()).await {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user))),
        Err(error) => handle_domain_error(error),
    }
}
