//! Business Logic Services

pub mod user;

pub use user::{UserService, UserServiceError, UserServiceResult};
