//! User management DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use wl_core::domain::entities::user::{User, UserRole, UserStatus};
use wl_core::errors::{DomainError, ValidationError};
use wl_core::repositories::UserFilter;
use wl_core::services::user::CreateUser;

/// Body for POST /api/v1/users
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub role: UserRole,
    pub department_id: Option<Uuid>,
    pub join_date: NaiveDate,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            role: request.role,
            department_id: request.department_id,
            join_date: request.join_date,
        }
    }
}

/// Query parameters for GET /api/v1/users
///
/// All filters are optional; absent parameters are not applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UserListQuery {
    pub status: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "departmentId", alias = "department_id")]
    pub department_id: Option<Uuid>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl UserListQuery {
    /// Convert the raw query parameters into a typed filter
    ///
    /// Unknown status/role values are rejected rather than silently
    /// ignored.
    pub fn to_filter(&self) -> Result<UserFilter, DomainError> {
        let status = self
            .status
            .as_deref()
            .map(|s| {
                UserStatus::parse(s).ok_or_else(|| ValidationError::InvalidField {
                    field: "status".to_string(),
                    message: format!("unknown status '{}'", s),
                })
            })
            .transpose()?;

        let role = self
            .role
            .as_deref()
            .map(|r| {
                UserRole::parse(r).ok_or_else(|| ValidationError::InvalidField {
                    field: "role".to_string(),
                    message: format!("unknown role '{}'", r),
                })
            })
            .transpose()?;

        Ok(UserFilter {
            status,
            role,
            department_id: self.department_id,
            search: self.search.clone(),
        })
    }

    /// Pagination with defaults applied
    pub fn pagination(&self) -> wl_shared::Pagination {
        wl_shared::Pagination::new(self.page.unwrap_or(0), self.size.unwrap_or(20))
    }
}

/// User representation returned by the API (no credential material)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub department_id: Option<Uuid>,
    pub join_date: NaiveDate,
    pub status: UserStatus,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            department_id: user.department_id,
            join_date: user.join_date,
            status: user.status,
        }
    }
}
