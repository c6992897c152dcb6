//! Core services

pub mod auth;
pub mod token;
pub mod user;

pub use auth::{AuthService, FixedWindowRateLimiter, LoginCredentials};
pub use token::{TokenService, TokenServiceConfig};
pub use user::{CreateUser, UserService};
