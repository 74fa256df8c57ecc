//! Integration tests for the Users domain
//!
//! These run the service and the SeaORM repository against a migrated
//! in-memory SQLite database.

use domain_users::*;
use test_utils::assertions::assert_unique_ids;
use test_utils::{TestDatabase, TestDataBuilder};

async fn service(db: &TestDatabase) -> UserService<SeaOrmUserRepository> {
    UserService::new(SeaOrmUserRepository::new(db.connection()))
}

#[tokio::test]
async fn test_list_on_empty_table_is_empty() {
    let db = TestDatabase::new().await;
    let service = service(&db).await;

    let users = service.list_users().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_created_user_is_listed_normalized() {
    let db = TestDatabase::new().await;
    let service = service(&db).await;

    service
        .create_user("  Juan ", " Pérez ", "  JUAN@Example.com ", " Ventas ")
        .await
        .unwrap();

    let users = service.list_users().await.unwrap();
    assert_eq!(users.len(), 1);

    let user = &users[0];
    assert!(user.id > 0);
    assert_eq!(user.first_name, "Juan");
    assert_eq!(user.last_name, "Pérez");
    assert_eq!(user.email, "juan@example.com");
    assert_eq!(user.department, "Ventas");
    assert_eq!(user.created_at, user.updated_at);
}

#[tokio::test]
async fn test_repository_returns_store_assigned_fields() {
    let db = TestDatabase::new().await;
    let repo = SeaOrmUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("repository_assigned_fields");

    let created = repo
        .create(NewUser {
            first_name: builder.name("nombre", "a"),
            last_name: builder.name("apellido", "a"),
            email: builder.email("a"),
            department: "Soporte".to_string(),
        })
        .await
        .unwrap();

    let listed = repo.list_all().await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_ids_are_unique() {
    let db = TestDatabase::new().await;
    let service = service(&db).await;
    let builder = TestDataBuilder::from_test_name("ids_are_unique");

    for suffix in ["a", "b", "c"] {
        service
            .create_user("Ana", "Ruiz", &builder.email(suffix), "RRHH")
            .await
            .unwrap();
    }

    let ids: Vec<i32> = service
        .list_users()
        .await
        .unwrap()
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids.len(), 3);
    assert_unique_ids(&ids, "listed users");
}

#[tokio::test]
async fn test_duplicate_email_after_normalization_is_rejected() {
    let db = TestDatabase::new().await;
    let service = service(&db).await;

    service
        .create_user("Juan", "Pérez", "juan@example.com", "Ventas")
        .await
        .unwrap();

    let err = service
        .create_user("Otro", "Nombre", "  Juan@EXAMPLE.com", "Compras")
        .await
        .unwrap_err();

    assert!(matches!(err, UserError::Database(_)));
    assert!(err.is_unique_violation());
    assert_eq!(service.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_closed_store_surfaces_database_error() {
    let db = TestDatabase::new().await;
    let service = service(&db).await;

    db.connection().close().await.unwrap();

    let err = service.list_users().await.unwrap_err();
    assert!(matches!(err, UserError::Database(_)));
    assert!(!err.is_unique_violation());
}
