//! User entity representing an employee account in the Worklog system.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user, ordered by privilege
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Employee,
    Manager,
    Admin,
}

impl UserRole {
    /// Wire/database representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Employee => "EMPLOYEE",
            UserRole::Manager => "MANAGER",
            UserRole::Admin => "ADMIN",
        }
    }

    /// Parse a role from its wire representation (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "EMPLOYEE" => Some(UserRole::Employee),
            "MANAGER" => Some(UserRole::Manager),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }

    /// Whether the role may list other users
    pub fn is_manager_or_admin(&self) -> bool {
        matches!(self, UserRole::Manager | UserRole::Admin)
    }

    /// Whether the role may create users
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    /// Wire/database representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
        }
    }

    /// Parse a status from its wire representation (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "ACTIVE" => Some(UserStatus::Active),
            "INACTIVE" => Some(UserStatus::Inactive),
            _ => None,
        }
    }
}

/// User entity representing a registered account
///
/// Accounts are never physically deleted; deactivation flips `status`
/// to `Inactive`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique across the system
    pub email: String,

    /// Bcrypt hash of the password, never exposed over the API
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Assigned role
    pub role: UserRole,

    /// Department the user belongs to, if any
    pub department_id: Option<Uuid>,

    /// Date the user joined the company
    pub join_date: NaiveDate,

    /// Account status
    pub status: UserStatus,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active user with a fresh id
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        role: UserRole,
        department_id: Option<Uuid>,
        join_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            role,
            department_id,
            join_date,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the account may authenticate
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.status = UserStatus::Inactive;
        self.updated_at = Utc::now();
    }
}
