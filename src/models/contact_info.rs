//! Contact Info Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact record owned by exactly one user
///
/// Lifecycle is tied to the owning user; this service reads it but never
/// creates or destroys it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactInfo {
    /// Unique identifier for the contact record
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}
