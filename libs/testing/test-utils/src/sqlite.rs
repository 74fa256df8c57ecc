//! SQLite test infrastructure
//!
//! Provides a `TestDatabase` helper backed by a private in-memory SQLite
//! database with the workspace migrations applied.

use database::sql::{SqlConfig, open};
use migration::Migrator;
use sea_orm::DatabaseConnection;

const MEMORY_URL: &str = "sqlite::memory:";

/// Test database wrapper
///
/// Every instance owns its own schema; the data disappears with the last
/// clone of the connection.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        // One connection: every pooled connection to :memory: is a separate database.
        let config = SqlConfig::with_pool_size(MEMORY_URL, 1, 1);

        let connection = open::<Migrator>(config, "test")
            .await
            .expect("Failed to open test database");

        tracing::debug!("Test database ready (in-memory SQLite)");

        Self { connection }
    }

    /// Get a clone of the database connection
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
