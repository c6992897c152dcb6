//! Request and response DTOs

pub mod auth_dto;
pub mod user_dto;

pub use auth_dto::{LoginRequest, TokenResponse};
pub use user_dto::{CreateUserRequest, UserListQuery, UserResponse};
