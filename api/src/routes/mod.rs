//! HTTP route handlers
//!
//! Handlers are generic over the user repository so the same routing code
//! serves the MySQL-backed binary and in-memory tests.

pub mod auth;
pub mod users;

use std::sync::Arc;

use wl_core::repositories::UserRepository;
use wl_core::services::auth::{AuthService, FixedWindowRateLimiter};
use wl_core::services::user::UserService;

/// Shared application state injected into handlers
pub struct AppState<U: UserRepository> {
    pub auth_service: Arc<AuthService<U>>,
    pub user_service: Arc<UserService<U>>,
    pub rate_limiter: Arc<FixedWindowRateLimiter>,
}
