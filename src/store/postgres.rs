//! PostgreSQL Store
//!
//! SQLx-backed implementation of the [`UserStore`] trait. Eager loading is a
//! LEFT JOIN for the zero-or-one contact row and a second query for the
//! favorites collection; partial updates use COALESCE so absent fields keep
//! their stored values.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{ContactInfo, Joke, User, UserProfile, UserWithContact, UserWithPassword};

use super::{NewUser, StoreError, UserChanges, UserFilter, UserStore};

/// Name of the unique constraint on users.email
const EMAIL_CONSTRAINT: &str = "users_email_key";

/// PostgreSQL-backed user store
#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    /// Create a store over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Flat row produced by the user/contact LEFT JOIN
#[derive(sqlx::FromRow)]
struct UserContactRow {
    id: Uuid,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    contact_id: Option<Uuid>,
    phone: Option<String>,
    address: Option<String>,
    city: Option<String>,
}

impl From<UserContactRow> for UserWithContact {
    fn from(row: UserContactRow) -> Self {
        let UserContactRow {
            id,
            name,
            email,
            created_at,
            updated_at,
            contact_id,
            phone,
            address,
            city,
        } = row;

        let contact_info = contact_id.map(|contact_id| ContactInfo {
            id: contact_id,
            user_id: id,
            phone,
            address,
            city,
        });

        UserWithContact {
            user: User {
                id,
                name,
                email,
                created_at,
                updated_at,
            },
            contact_info,
        }
    }
}

/// Map a write error to [`StoreError::UniqueViolation`] when the email
/// constraint rejected it
fn map_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.constraint() == Some(EMAIL_CONSTRAINT) {
            return StoreError::UniqueViolation(EMAIL_CONSTRAINT.to_string());
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_all(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            WHERE ($1::text IS NULL OR name = $1)
              AND ($2::text IS NULL OR email = $2)
            ORDER BY created_at, id
            "#,
        )
        .bind(&filter.name)
        .bind(&filter.email)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_with_contact(&self, id: Uuid) -> Result<Option<UserWithContact>, StoreError> {
        let row = sqlx::query_as::<_, UserContactRow>(
            r#"
            SELECT u.id, u.name, u.email, u.created_at, u.updated_at,
                   c.id AS contact_id, c.phone, c.address, c.city
            FROM users u
            LEFT JOIN contact_info c ON c.user_id = u.id
            WHERE u.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserWithContact::from))
    }

    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        let Some(with_contact) = self.find_with_contact(id).await? else {
            return Ok(None);
        };

        let favorite_jokes = sqlx::query_as::<_, Joke>(
            r#"
            SELECT j.id, j.content, j.category, j.created_at
            FROM jokes j
            INNER JOIN user_favorite_jokes f ON f.joke_id = j.id
            WHERE f.user_id = $1
            ORDER BY j.created_at, j.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(UserProfile {
            user: with_contact.user,
            contact_info: with_contact.contact_info,
            favorite_jokes,
        }))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, UserWithPassword>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(user.into())
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, UserWithPassword>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(user.map(User::from))
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
