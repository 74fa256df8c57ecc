//! SQL store connector and utilities
//!
//! Provides connection management, migration running and health checks for
//! any SeaORM backend enabled in the workspace (SQLite, PostgreSQL).

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE_URL, SqlConfig, url_from_dsn};
pub use connector::{connect, connect_from_config, open, run_migrations};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
