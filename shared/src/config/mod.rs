//! Configuration modules for the Worklog server
//!
//! All configuration is environment-driven with sensible defaults for
//! local development.

mod auth;
mod database;
mod rate_limit;
mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;

/// Aggregated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
        }
    }
}
