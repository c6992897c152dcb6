//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository traits for the
//! Worklog backend: MySQL persistence via SQLx and connection-pool
//! management.

pub mod database;

pub use database::connection::create_pool;
pub use database::mysql::MySqlUserRepository;
