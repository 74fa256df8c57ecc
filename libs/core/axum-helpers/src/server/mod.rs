//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with the versioned API prefix and OpenAPI document
//! - Liveness and readiness helpers
//! - Graceful shutdown
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::server::ServerConfig;
//!
//! let app = create_router::<ApiDoc>(api_routes).merge(health_router());
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{API_PREFIX, OPENAPI_PATH, create_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;
