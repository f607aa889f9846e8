//! Request and Response Models
//!
//! Data structures for API request payloads and operation-specific responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request payload for creating a new user
///
/// The caller is trusted to supply a well-formed attribute set; uniqueness is
/// enforced by the store. The plaintext password is replaced with a bcrypt
/// digest before the record is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    /// User's display name
    pub name: String,

    /// User's email address (unique)
    pub email: String,

    /// Plaintext password, hashed before storage and never persisted as-is
    pub password: String,
}

/// Request payload for updating a user
///
/// Every field is optional; absent fields preserve the current value. A
/// supplied password is hashed before it reaches the store, same as creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Allow-listed query parameters for listing users
///
/// Only these fields can be filtered on; any other query parameter is
/// ignored rather than forwarded to the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersQuery {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ListUsersQuery {
    /// True when no filter field was supplied, meaning "all users"
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}
