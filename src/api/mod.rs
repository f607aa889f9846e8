//! HTTP API Layer
//!
//! Handlers, caller-identity middleware, and configurable route definitions.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::{ApiResponse, AppState};
pub use middleware::AuthUser;
pub use routes::{create_routes, RouterBuilder};
