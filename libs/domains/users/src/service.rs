use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{NewUser, User};
use crate::repository::UserRepository;

/// Service layer for user registration
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Normalize and persist a user.
    ///
    /// Repository errors, including a taken email, are returned unchanged.
    pub async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        department: &str,
    ) -> UserResult<()> {
        let user = normalize(first_name, last_name, email, department);
        self.repository.create(user).await?;
        Ok(())
    }

    /// List every registered user
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list_all().await
    }
}

/// Trim every field and lower-case the email.
pub fn normalize(first_name: &str, last_name: &str, email: &str, department: &str) -> NewUser {
    NewUser {
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        email: email.trim().to_lowercase(),
        department: department.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::repository::{InMemoryUserRepository, MockUserRepository};
    use sea_orm::{DbErr, RuntimeErr};

    fn stored(user: NewUser) -> User {
        let now = chrono::Utc::now();
        User {
            id: 1,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            department: user.department,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_normalize_trims_and_lowercases_email() {
        let user = normalize("  Juan ", " Pérez  ", "  JUAN@Example.COM ", " Ventas ");

        assert_eq!(
            user,
            NewUser {
                first_name: "Juan".to_string(),
                last_name: "Pérez".to_string(),
                email: "juan@example.com".to_string(),
                department: "Ventas".to_string(),
            }
        );
    }

    #[test]
    fn test_normalize_keeps_name_case() {
        let user = normalize("MARÍA", "de la Cruz", "m@x.io", "I+D");
        assert_eq!(user.first_name, "MARÍA");
        assert_eq!(user.last_name, "de la Cruz");
    }

    #[tokio::test]
    async fn test_create_user_passes_normalized_record() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .withf(|user| user.email == "juan@example.com" && user.first_name == "Juan")
            .times(1)
            .returning(|user| Ok(stored(user)));

        let service = UserService::new(mock_repo);
        let result = service
            .create_user(" Juan ", "Pérez", " Juan@Example.com ", "Ventas")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_user_propagates_repository_error() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_create().returning(|_| {
            Err(UserError::Database(DbErr::Conn(RuntimeErr::Internal(
                "database is locked".to_string(),
            ))))
        });

        let service = UserService::new(mock_repo);
        let err = service
            .create_user("Juan", "Pérez", "juan@example.com", "Ventas")
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::Database(_)));
        assert!(!err.is_unique_violation());
    }

    #[tokio::test]
    async fn test_list_users_delegates() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_list_all().times(1).returning(|| {
            Ok(vec![stored(normalize("Ana", "Ruiz", "ana@example.com", "RRHH"))])
        });

        let service = UserService::new(mock_repo);
        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_differing_in_case_and_whitespace() {
        let service = UserService::new(InMemoryUserRepository::new());

        service
            .create_user("Juan", "Pérez", "juan@example.com", "Ventas")
            .await
            .unwrap();

        let err = service
            .create_user("Juan", "Pérez", "  JUAN@EXAMPLE.COM ", "Ventas")
            .await
            .unwrap_err();

        assert!(err.is_unique_violation());
        assert_eq!(service.list_users().await.unwrap().len(), 1);
    }
}
