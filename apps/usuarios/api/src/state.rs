//! Application state management.

/// Shared application state.
///
/// Cloned per handler; the connection is a pooled handle, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    /// SQL connection pool
    pub db: database::sql::DatabaseConnection,
}
