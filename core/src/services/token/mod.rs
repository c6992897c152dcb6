//! JWT token issuance and validation

mod config;
mod service;

pub use config::TokenServiceConfig;
pub use service::TokenService;
