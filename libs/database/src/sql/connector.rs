use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqlConfig;
use crate::common::{DatabaseError, DatabaseResult};

/// Connect with the given options
pub async fn connect(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Successfully connected to database");
    Ok(db)
}

/// Connect using a SqlConfig
pub async fn connect_from_config(config: SqlConfig) -> Result<DatabaseConnection, DbErr> {
    connect(config.into_connect_options()).await
}

/// Run all pending migrations of `M`
///
/// # Example
/// ```ignore
/// use migration::Migrator;
/// use database::sql::run_migrations;
///
/// run_migrations::<Migrator>(&db, "usuarios_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

/// Open the store: connect, then bring the schema up to date.
///
/// Either step failing is reported as an error and nothing is retried; the
/// caller is expected to abort startup.
pub async fn open<M: MigratorTrait>(
    config: SqlConfig,
    app_name: &str,
) -> DatabaseResult<DatabaseConnection> {
    let db = connect_from_config(config).await.map_err(|e| {
        tracing::error!(error = %e, "Could not connect to the database");
        DatabaseError::ConnectionFailed(e.to_string())
    })?;

    run_migrations::<M>(&db, app_name).await.map_err(|e| {
        tracing::error!(error = %e, "Could not migrate the database");
        DatabaseError::MigrationError(e.to_string())
    })?;

    info!("Database initialized");
    Ok(db)
}
