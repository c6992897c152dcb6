//! User repository trait defining the interface for user persistence.
//!
//! Implementations handle the actual database operations while keeping
//! the abstraction boundary between the domain and infrastructure layers.

use async_trait::async_trait;
use uuid::Uuid;

use wl_shared::Pagination;

use crate::domain::entities::user::{User, UserRole, UserStatus};
use crate::errors::DomainError;

/// Optional filters for the user listing query
///
/// `None` on any field means the filter is not applied. `search` matches
/// case-insensitively as a substring against first name, last name, and
/// email.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub status: Option<UserStatus>,
    pub role: Option<UserRole>,
    pub department_id: Option<Uuid>,
    pub search: Option<String>,
}

impl UserFilter {
    /// Whether no filter is active
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.role.is_none()
            && self.department_id.is_none()
            && self.search.is_none()
    }
}

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check whether a user with the given email exists
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a new user
    ///
    /// Fails with a validation error if the email is already taken.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Fetch a page of users matching the filter, plus the total match count
    async fn find_with_filters(
        &self,
        filter: &UserFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<User>, u64), DomainError>;
}
