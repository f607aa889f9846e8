//! Store Layer
//!
//! Persistence abstraction over the user, contact info, and joke entities.
//! Handlers and the service never touch the database directly; they go
//! through the [`UserStore`] trait so tests can substitute the in-memory
//! implementation for the PostgreSQL one.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{User, UserProfile, UserWithContact};

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PostgresUserStore;

/// Errors surfaced by a store implementation
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A unique constraint rejected the write
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
}

/// Filter for listing users, restricted to the allow-listed fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Attribute set for inserting a new user
///
/// The password arrives here already hashed; the store never sees plaintext.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update for a user row; `None` preserves the stored value
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// Capability set the controller needs from the persistence layer
#[async_trait]
pub trait UserStore: Send + Sync {
    /// List users matching the filter; an empty filter matches everyone.
    async fn find_all(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError>;

    /// Look up one user by primary key with contact info eager-loaded.
    async fn find_with_contact(&self, id: Uuid) -> Result<Option<UserWithContact>, StoreError>;

    /// Look up one user by primary key with contact info and the favorited
    /// jokes collection eager-loaded.
    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>, StoreError>;

    /// Insert a new user row and return the persisted record.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Apply a partial update and return the persisted row, or `None` when
    /// no row matched the id.
    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<Option<User>, StoreError>;

    /// Delete the user row and return the number of rows removed.
    async fn delete(&self, id: Uuid) -> Result<u64, StoreError>;

    /// Connectivity check for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}
