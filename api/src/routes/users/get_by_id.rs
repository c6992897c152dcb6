use actix_web::{web, HttpResponse};
use uuid::Uuid;

use wl_core::errors::AuthError;
use wl_core::repositories::UserRepository;
use wl_shared::ApiResponse;

use crate::dto::UserResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/users/{id}
///
/// Fetches a single user by id. Restricted to managers and admins.
///
/// # Responses
/// - 200: the user
/// - 403: caller is neither manager nor admin
/// - 404: no user with that id
pub async fn get_user_by_id<U>(
    auth: AuthContext,
    state: web::Data<AppState<U>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if !auth.role.is_manager_or_admin() {
        return handle_domain_error(AuthError::InsufficientPermissions.into());
    }

    match state.user_service.get_user_by_id(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user))),
        Err(error) => handle_domain_error(error),
    }
}
