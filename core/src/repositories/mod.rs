//! Repository traits defining the persistence interfaces

pub mod user;

pub use user::{MockUserRepository, UserFilter, UserRepository};
