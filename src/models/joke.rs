//! Joke Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Joke entity, read-only from this service's perspective
///
/// Jokes are associated to users through the favorites relation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Joke {
    /// Unique identifier for the joke
    pub id: Uuid,

    pub content: String,
    pub category: Option<String>,

    pub created_at: DateTime<Utc>,
}
