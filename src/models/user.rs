//! User Model
//!
//! Core user data structures and the eager-loaded read models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{contact_info::ContactInfo, joke::Joke};

/// User representation for external API responses
///
/// This struct represents a user record without sensitive information like the
/// password hash. All datetime fields use UTC timezone for consistency across
/// different deployments.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// User's display name
    pub name: String,

    /// User's email address (unique)
    pub email: String,

    /// Timestamp when the user record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Internal user representation including the password hash
///
/// Used by the store implementations for rows that carry the bcrypt digest.
/// It's never exposed in API responses.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct UserWithPassword {
    pub id: Uuid,
    pub name: String,
    pub email: String,

    /// bcrypt hashed password
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserWithPassword> for User {
    /// Convert the internal row to the public user struct
    ///
    /// This conversion strips the password hash, ensuring it's never
    /// accidentally exposed in API responses.
    fn from(user_with_password: UserWithPassword) -> Self {
        User {
            id: user_with_password.id,
            name: user_with_password.name,
            email: user_with_password.email,
            created_at: user_with_password.created_at,
            updated_at: user_with_password.updated_at,
        }
    }
}

/// A user with their contact info eager-loaded into the same object
#[derive(Debug, Clone, Serialize)]
pub struct UserWithContact {
    #[serde(flatten)]
    pub user: User,

    /// Related contact record, `null` when the user has none
    pub contact_info: Option<ContactInfo>,
}

/// A user's own profile: contact info plus the favorited jokes collection
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: User,

    /// Related contact record, `null` when the user has none
    pub contact_info: Option<ContactInfo>,

    /// Jokes the user has favorited, possibly empty
    pub favorite_jokes: Vec<Joke>,
}
