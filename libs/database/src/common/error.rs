/// Unified database error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// The store could not be reached
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// The schema could not be created or verified
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
