//! Shared utilities and common types for the Worklog server
//!
//! This crate provides functionality used across the server modules:
//! - Configuration structures (server, database, JWT, rate limiting)
//! - Common response and pagination types

pub mod config;
pub mod types;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, DatabaseConfig, JwtConfig, RateLimitConfig, ServerConfig};
pub use types::pagination::{PaginatedResponse, Pagination};
pub use types::response::ApiResponse;
