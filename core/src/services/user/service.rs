//! User creation and query flows

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use wl_shared::{PaginatedResponse, Pagination};

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{UserFilter, UserRepository};

/// Fields required to create a user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub department_id: Option<Uuid>,
    pub join_date: NaiveDate,
}

/// Service for user CRUD and filtered listing
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Create a new user service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Create a user after enforcing email uniqueness
    ///
    /// The password is hashed with bcrypt before the entity is persisted;
    /// the plaintext never leaves this function.
    pub async fn create_user(&self, request: CreateUser) -> DomainResult<User> {
        if self.user_repository.exists_by_email(&request.email).await? {
            return Err(ValidationError::DuplicateEmail {
                email: request.email,
            }
            .into());
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST).map_err(|e| {
            DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            }
        })?;

        let user = User::new(
            request.email,
            password_hash,
            request.first_name,
            request.last_name,
            request.role,
            request.department_id,
            request.join_date,
        );

        let created = self.user_repository.create(user).await?;
        info!(user_id = %created.id, "user created");
        Ok(created)
    }

    /// Fetch a page of users matching the optional filters
    pub async fn get_users(
        &self,
        filter: UserFilter,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<User>> {
        let pagination = pagination.validate();
        let (users, total) = self
            .user_repository
            .find_with_filters(&filter, &pagination)
            .await?;
        Ok(PaginatedResponse::new(users, pagination, total))
    }

    /// Fetch a user by id
    pub async fn get_user_by_id(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: format!("User {}", id),
            })
    }

    /// Fetch the authenticated principal's own record
    pub async fn get_current_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.get_user_by_id(user_id).await
    }
}
