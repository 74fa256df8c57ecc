use core_config::{FromEnv, server::ServerConfig};
use database::sql::SqlConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` and `database` libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: SqlConfig,
}

impl Config {
    /// Load configuration, reading a `.env` file first when one exists.
    pub fn from_env() -> eyre::Result<Self> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, HTTP_PORT=8080
        let database = SqlConfig::from_env()?; // DATABASE_URL defaults to a local SQLite file

        Ok(Self {
            environment,
            server,
            database,
        })
    }
}
