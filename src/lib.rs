//! JokeHub User Service Library
//!
//! A user management service for the JokeHub API providing CRUD operations
//! over user records with eager-loaded related data (contact info, favorited
//! jokes) and bcrypt password hashing on every write path that sets a
//! password.
//!
//! # Features
//!
//! - **User CRUD**: list (allow-listed filters), fetch, create, update, delete
//! - **Eager Loading**: contact info and favorite jokes returned in the same
//!   result object as the user
//! - **Password Security**: bcrypt hashing with a configurable cost factor
//! - **Pluggable Store**: handlers talk to a `UserStore` trait; PostgreSQL in
//!   production, an in-memory implementation in tests
//! - **Flexible Router**: configurable endpoints via the RouterBuilder pattern
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use jokehub_user_service::{
//!     api::{AppState, RouterBuilder},
//!     config::AppConfig,
//!     database::DatabaseConfig,
//!     service::UserService,
//!     store::PostgresUserStore,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env();
//!     config.validate()?;
//!
//!     let pool = DatabaseConfig::from_env()?.create_pool().await?;
//!     let store = Arc::new(PostgresUserStore::new(pool));
//!     let user_service = Arc::new(UserService::with_bcrypt_cost(
//!         store,
//!         config.security.bcrypt_cost,
//!     ));
//!
//!     let app = RouterBuilder::with_all_routes()
//!         .build()
//!         .with_state(AppState { user_service });
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **API Layer**: HTTP handlers, caller-identity middleware, routing
//! - **Service Layer**: business logic (hashing, not-found translation)
//! - **Store Layer**: `UserStore` trait with PostgreSQL and in-memory impls
//! - **Models**: entities, eager-loaded read models, payloads
//! - **Database**: connection pooling and configuration
//! - **Utils**: error types and security helpers

/// HTTP API layer with handlers and configurable routing
pub mod api;

/// Configuration management for all service settings
pub mod config;

/// Database connection management and configuration
pub mod database;

/// Data models and request/response structures
pub mod models;

/// Business logic for user management
pub mod service;

/// Persistence abstraction and its implementations
pub mod store;

/// Shared utilities for security and error handling
pub mod utils;

// Re-export commonly used types for convenient access
pub use api::{create_routes, ApiResponse, AppState, AuthUser, RouterBuilder};
pub use config::AppConfig;
pub use database::{DatabaseConfig, DatabasePool};
pub use models::{
    ContactInfo, CreateUserRequest, Joke, ListUsersQuery, UpdateUserRequest, User, UserProfile,
    UserWithContact,
};
pub use service::{UserService, UserServiceError};
pub use store::{MemoryUserStore, PostgresUserStore, StoreError, UserStore};
pub use utils::error::{AppError, AppResult, ErrorResponse};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
