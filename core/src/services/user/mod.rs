//! User management service

mod service;

pub use service::{CreateUser, UserService};
