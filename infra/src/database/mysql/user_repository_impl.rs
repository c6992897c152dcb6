//! MySQL implementation of the UserRepository trait.
//!
//! The filtered listing composes optional `AND` predicates so that an
//! absent filter is simply not part of the query, mirroring the
//! null-means-ignore contract of the service layer. The page and count
//! queries share the same predicate builder so totals always match the
//! rows returned.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::mysql::{MySql, MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use wl_core::domain::entities::user::{User, UserRole, UserStatus};
use wl_core::errors::{DomainError, ValidationError};
use wl_core::repositories::{UserFilter, UserRepository};
use wl_shared::Pagination;

const USER_COLUMNS: &str = "id, email, password_hash, first_name, last_name, \
                            role, department_id, join_date, status, \
                            created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_err(format!("Failed to get id: {}", e)))?;
        let role_str: String = row
            .try_get("role")
            .map_err(|e| db_err(format!("Failed to get role: {}", e)))?;
        let status_str: String = row
            .try_get("status")
            .map_err(|e| db_err(format!("Failed to get status: {}", e)))?;
        let department_id: Option<String> = row
            .try_get("department_id")
            .map_err(|e| db_err(format!("Failed to get department_id: {}", e)))?;

        let role = UserRole::parse(&role_str)
            .ok_or_else(|| db_err(format!("Unknown role value: {}", role_str)))?;
        let status = UserStatus::parse(&status_str)
            .ok_or_else(|| db_err(format!("Unknown status value: {}", status_str)))?;
        let department_id = department_id
            .map(|d| Uuid::parse_str(&d))
            .transpose()
            .map_err(|e| db_err(format!("Invalid department UUID: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| db_err(format!("Invalid UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| db_err(format!("Failed to get email: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_err(format!("Failed to get password_hash: {}", e)))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| db_err(format!("Failed to get first_name: {}", e)))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| db_err(format!("Failed to get last_name: {}", e)))?,
            role,
            department_id,
            join_date: row
                .try_get::<NaiveDate, _>("join_date")
                .map_err(|e| db_err(format!("Failed to get join_date: {}", e)))?,
            status,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_err(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_err(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    /// Append the active filter predicates to a query string
    fn push_filter_sql(sql: &mut String, filter: &UserFilter) {
        if filter.status.is_some() {
            sql.push_str(" AND status = ?");
        }
        if filter.role.is_some() {
            sql.push_str(" AND role = ?");
        }
        if filter.department_id.is_some() {
            sql.push_str(" AND department_id = ?");
        }
        if filter.search.is_some() {
            sql.push_str(
                " AND (LOWER(first_name) LIKE ? OR LOWER(last_name) LIKE ? \
                 OR LOWER(email) LIKE ?)",
            );
        }
    }

    /// Bind the active filter values in the same order as `push_filter_sql`
    fn bind_filters<'q>(
        mut query: Query<'q, MySql, MySqlArguments>,
        filter: &UserFilter,
    ) -> Query<'q, MySql, MySqlArguments> {
        if let Some(status) = filter.status {
            query = query.bind(status.as_str());
        }
        if let Some(role) = filter.role {
            query = query.bind(role.as_str());
        }
        if let Some(department_id) = filter.department_id {
            query = query.bind(department_id.to_string());
        }
        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.to_lowercase());
            query = query
                .bind(pattern.clone())
                .bind(pattern.clone())
                .bind(pattern);
        }
        query
    }
}

fn db_err(message: String) -> DomainError {
    DomainError::Database { message }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ? LIMIT 1");

        let result = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ? LIMIT 1");

        let result = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let sql = "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS user_exists";

        let row = sqlx::query(sql)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_err(format!("Failed to check user existence: {}", e)))?;

        let exists: i8 = row
            .try_get("user_exists")
            .map_err(|e| db_err(format!("Failed to get existence result: {}", e)))?;
        Ok(exists == 1)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        // Uniqueness is also enforced by the database; this check turns a
        // constraint violation into a typed error before the insert.
        if self.exists_by_email(&user.email).await? {
            return Err(ValidationError::DuplicateEmail {
                email: user.email.clone(),
            }
            .into());
        }

        let sql = r#"
            INSERT INTO users (
                id, email, password_hash, first_name, last_name,
                role, department_id, join_date, status,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(sql)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.role.as_str())
            .bind(user.department_id.map(|d| d.to_string()))
            .bind(user.join_date)
            .bind(user.status.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_err(format!("Failed to create user: {}", e)))?;

        Ok(user)
    }

    async fn find_with_filters(
        &self,
        filter: &UserFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<User>, u64), DomainError> {
        let mut count_sql = String::from("SELECT COUNT(*) AS total FROM users WHERE 1 = 1");
        Self::push_filter_sql(&mut count_sql, filter);

        let count_row = Self::bind_filters(sqlx::query(&count_sql), filter)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_err(format!("Failed to count users: {}", e)))?;
        let total: i64 = count_row
            .try_get("total")
            .map_err(|e| db_err(format!("Failed to get count: {}", e)))?;

        let mut page_sql = format!("SELECT {USER_COLUMNS} FROM users WHERE 1 = 1");
        Self::push_filter_sql(&mut page_sql, filter);
        page_sql.push_str(" ORDER BY last_name, first_name LIMIT ? OFFSET ?");

        let rows = Self::bind_filters(sqlx::query(&page_sql), filter)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_err(format!("Failed to list users: {}", e)))?;

        let users = rows
            .iter()
            .map(Self::row_to_user)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_with_everything() -> UserFilter {
        UserFilter {
            status: Some(UserStatus::Active),
            role: Some(UserRole::Manager),
            department_id: Some(Uuid::new_v4()),
            search: Some("smith".to_string()),
        }
    }

    #[test]
    fn test_no_filters_adds_no_predicates() {
        let mut sql = String::from("SELECT COUNT(*) FROM users WHERE 1 = 1");
        MySqlUserRepository::push_filter_sql(&mut sql, &UserFilter::default());
        assert_eq!(sql, "SELECT COUNT(*) FROM users WHERE 1 = 1");
    }

    #[test]
    fn test_all_filters_appear_in_order() {
        let mut sql = String::new();
        MySqlUserRepository::push_filter_sql(&mut sql, &filter_with_everything());

        let status_pos = sql.find("status = ?").unwrap();
        let role_pos = sql.find("role = ?").unwrap();
        let dept_pos = sql.find("department_id = ?").unwrap();
        let search_pos = sql.find("LOWER(first_name) LIKE ?").unwrap();
        assert!(status_pos < role_pos && role_pos < dept_pos && dept_pos < search_pos);

        // Search expands to three placeholders, one per column
        assert_eq!(sql.matches("LIKE ?").count(), 3);
    }

    #[test]
    fn test_single_filter_only_adds_its_predicate() {
        let mut sql = String::new();
        let filter = UserFilter {
            role: Some(UserRole::Admin),
            ..Default::default()
        };
        MySqlUserRepository::push_filter_sql(&mut sql, &filter);
        assert_eq!(sql, " AND role = ?");
    }
}
