//! Authentication service: credential verification, token issuance,
//! and request rate limiting.

mod rate_limiter;
mod service;

pub use rate_limiter::FixedWindowRateLimiter;
pub use service::{AuthService, LoginCredentials};
