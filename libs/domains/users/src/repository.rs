use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a single user; the store assigns id and timestamps
    async fn create(&self, user: NewUser) -> UserResult<User>;

    /// Every stored user, in no particular order
    async fn list_all(&self) -> UserResult<Vec<User>>;
}

#[derive(Debug, Default)]
struct Store {
    users: Vec<User>,
    last_id: i32,
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Emulates the store's unique index on `email` with an exact comparison.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        if store.users.iter().any(|u| u.email == user.email) {
            return Err(UserError::DuplicateEmail(user.email));
        }

        store.last_id += 1;
        let now = chrono::Utc::now();
        let created = User {
            id: store.last_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            department: user.department,
            created_at: now,
            updated_at: now,
        };
        store.users.push(created.clone());

        tracing::info!(user_id = created.id, "Created user");
        Ok(created)
    }

    async fn list_all(&self) -> UserResult<Vec<User>> {
        Ok(self.store.read().await.users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
            email: email.to_string(),
            department: "Soporte".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(new_user("a@example.com")).await.unwrap();
        let second = repo.create(new_user("b@example.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("a@example.com")).await.unwrap();

        let err = repo.create(new_user("a@example.com")).await.unwrap_err();
        assert!(err.is_unique_violation());
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryUserRepository::new();
        let other = repo.clone();

        repo.create(new_user("a@example.com")).await.unwrap();
        assert_eq!(other.list_all().await.unwrap().len(), 1);
    }
}
