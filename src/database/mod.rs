//! Database Layer
//!
//! Connection management and configuration for PostgreSQL.

pub mod connection;

pub use connection::{DatabaseConfig, DatabasePool};
