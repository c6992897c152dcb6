//! Domain entities

pub mod token;
pub mod user;

pub use token::{Claims, TokenPair, UserSummary};
pub use user::{User, UserRole, UserStatus};
