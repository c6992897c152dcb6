//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use wl_shared::Pagination;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, ValidationError};

use super::repository::{UserFilter, UserRepository};

/// In-memory user repository for tests
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with existing users
    pub async fn with_users(users: Vec<User>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.users.write().await;
            for user in users {
                map.insert(user.id, user);
            }
        }
        repo
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_filter(user: &User, filter: &UserFilter) -> bool {
    if let Some(status) = filter.status {
        if user.status != status {
            return false;
        }
    }
    if let Some(role) = filter.role {
        if user.role != role {
            return false;
        }
    }
    if let Some(department_id) = filter.department_id {
        if user.department_id != Some(department_id) {
            return false;
        }
    }
    if let Some(ref search) = filter.search {
        let needle = search.to_lowercase();
        let haystacks = [
            user.first_name.to_lowercase(),
            user.last_name.to_lowercase(),
            user.email.to_lowercase(),
        ];
        if !haystacks.iter().any(|h| h.contains(&needle)) {
            return false;
        }
    }
    true
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email.eq_ignore_ascii_case(email)))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(ValidationError::DuplicateEmail {
                email: user.email.clone(),
            }
            .into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_with_filters(
        &self,
        filter: &UserFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<User>, u64), DomainError> {
        let users = self.users.read().await;

        let mut matching: Vec<User> = users
            .values()
            .filter(|u| matches_filter(u, filter))
            .cloned()
            .collect();
        // Stable order for pagination
        matching.sort_by(|a, b| a.email.cmp(&b.email));

        let total = matching.len() as u64;
        let page: Vec<User> = matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect();

        Ok((page, total))
    }
}
