//! # Axum Helpers
//!
//! Utilities shared by the HTTP layer of the workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, liveness/readiness, graceful shutdown
//! - **[`errors`]**: `{"error": ...}` error responses
//! - **[`extractors`]**: Validated JSON extractor
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let api_routes = Router::new(); // Add your routes
//!     let app = create_router::<ApiDoc>(api_routes).merge(health_router());
//!
//!     create_app(app, &ServerConfig::default()).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export server types
pub use server::{
    API_PREFIX, HealthCheckFuture, HealthResponse, create_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;
