//! Data Models
//!
//! Entity structs, eager-loaded read models, and request/response payloads.

pub mod contact_info;
pub mod joke;
pub mod requests;
pub mod user;

pub use contact_info::ContactInfo;
pub use joke::Joke;
pub use requests::{CreateUserRequest, HealthCheckResponse, ListUsersQuery, UpdateUserRequest};
pub use user::{User, UserProfile, UserWithContact};

pub(crate) use user::UserWithPassword;
