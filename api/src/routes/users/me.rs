use actix_web::{web, HttpResponse};

use wl_core::repositories::UserRepository;
use wl_shared::ApiResponse;

use crate::dto::UserResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/users/me
///
/// Returns the authenticated caller's own record. Available to every
/// role.
pub async fn current_user<U>(
    auth: AuthContext,
    state: web::Data<AppState<U>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    match state.user_service.get_current_user(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user))),
        Err(error) => handle_domain_error(error),
    }
}
