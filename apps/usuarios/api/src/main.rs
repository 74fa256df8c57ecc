use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const APP_NAME: &str = "usuarios";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        environment = %config.environment,
        address = %config.server.address(),
        "Starting {} API",
        APP_NAME
    );

    // Connect and migrate; a failure here aborts before anything listens
    let db = database::sql::open::<Migrator>(config.database.clone(), APP_NAME)
        .await
        .map_err(|e| eyre::eyre!("Database initialization failed: {}", e))?;

    let state = AppState { config, db };

    let api_routes = api::routes(&state);

    // create_router adds the prefix, OpenAPI document, 404 fallback and tracing
    let app = create_router::<openapi::ApiDoc>(api_routes)
        .merge(health_router())
        .merge(api::ready_router(state.clone()));

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutting down: closing database connections");
    match state.db.close().await {
        Ok(()) => info!("Database connection closed successfully"),
        Err(e) => tracing::error!("Error closing database: {}", e),
    }

    info!("{} API shutdown complete", APP_NAME);
    Ok(())
}
