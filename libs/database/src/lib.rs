//! Relational store adapter built on SeaORM
//!
//! Opens a pooled connection from a URL (SQLite or PostgreSQL), runs the
//! schema migrations at startup and exposes a ping-based health check.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::sql::{self, SqlConfig};
//! use migration::Migrator;
//!
//! let config = SqlConfig::from_env()?;
//! let db = sql::open::<Migrator>(config, "usuarios_api").await?;
//! ```

pub mod common;
pub mod sql;

pub use common::{DatabaseError, DatabaseResult};
