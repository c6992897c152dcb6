use actix_web::{web, HttpResponse};

use wl_core::errors::AuthError;
use wl_core::repositories::UserRepository;
use wl_shared::ApiResponse;

use crate::dto::{UserListQuery, UserResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/users
///
/// Lists users with optional `status`, `role`, `department_id` and
/// `search` filters, paginated by `page`/`size`. Restricted to managers
/// and admins.
///
/// # Responses
/// - 200: paginated user list
/// - 400: unknown status/role filter value
/// - 403: caller is neither manager nor admin
pub async fn list_users<U>(
    auth: AuthContext,
    state: web::Data<AppState<U>>,
    query: web::Query<UserListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if !auth.role.is_manager_or_admin() {
        return handle_domain_error(AuthError::InsufficientPermissions.into());
    }

    let filter = match query.to_filter() {
        Ok(filter) => filter,
        Err(error) => return handle_domain_error(error),
    };

    match state.user_service.get_users(filter, query.pagination()).await {
        Ok(page) => {
            HttpResponse::Ok().json(ApiResponse::success(page.map(UserResponse::from)))
        }
        Err(error) => handle_domain_error(error),
    }
}
