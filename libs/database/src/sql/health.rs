use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::{DatabaseError, DatabaseResult};

/// Check store health by pinging the pool.
///
/// Used by readiness probes; liveness never touches the store.
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    debug!("Running database health check");

    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("database ping failed: {}", e)))?;

    debug!("Database health check passed");
    Ok(())
}
