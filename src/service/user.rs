//! User Service Implementation
//!
//! Core business logic for the user management operations. Each operation is
//! a single pass through the injected store; the service's own work is
//! hashing passwords before they reach a write path and translating missing
//! rows into [`UserServiceError::UserNotFound`].

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    CreateUserRequest, ListUsersQuery, UpdateUserRequest, User, UserProfile, UserWithContact,
};
use crate::store::{NewUser, StoreError, UserChanges, UserFilter, UserStore};
use crate::utils::security::{hash_password_with_cost, DEFAULT_BCRYPT_COST};

/// Custom error types for the user service
#[derive(Error, Debug)]
pub enum UserServiceError {
    /// User with the specified identifier was not found
    #[error("User not found")]
    UserNotFound,

    /// Store operation failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Password hashing operation failed
    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

/// Result type for user service operations
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// Core user service providing the CRUD operations
#[derive(Clone)]
pub struct UserService {
    /// Persistence backend, injected so tests can substitute a fake
    store: Arc<dyn UserStore>,

    /// bcrypt cost factor for password hashing (higher = more secure but slower)
    bcrypt_cost: u32,
}

impl UserService {
    /// Creates a new UserService over the given store with the default cost
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    /// Creates a new UserService with a configured bcrypt cost factor
    pub fn with_bcrypt_cost(store: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// Lists users matching the allow-listed filter
    ///
    /// An empty filter matches all users; zero matches is an empty list,
    /// not an error.
    pub async fn list_users(&self, query: &ListUsersQuery) -> UserServiceResult<Vec<User>> {
        let filter = UserFilter {
            name: query.name.clone(),
            email: query.email.clone(),
        };

        Ok(self.store.find_all(&filter).await?)
    }

    /// Retrieves a user by id with contact info eager-loaded
    pub async fn get_user(&self, id: Uuid) -> UserServiceResult<UserWithContact> {
        self.store
            .find_with_contact(id)
            .await?
            .ok_or(UserServiceError::UserNotFound)
    }

    /// Retrieves a user's own profile: contact info plus favorited jokes
    pub async fn get_profile(&self, id: Uuid) -> UserServiceResult<UserProfile> {
        self.store
            .find_profile(id)
            .await?
            .ok_or(UserServiceError::UserNotFound)
    }

    /// Creates a new user, replacing the plaintext password with its digest
    pub async fn create_user(&self, request: CreateUserRequest) -> UserServiceResult<User> {
        let password_hash = hash_password_with_cost(&request.password, self.bcrypt_cost)?;

        let user = self
            .store
            .create(NewUser {
                name: request.name,
                email: request.email,
                password_hash,
            })
            .await?;

        Ok(user)
    }

    /// Applies a partial update and returns the persisted row
    ///
    /// A password in the payload is hashed before it reaches the store, the
    /// same as on creation; no write path persists plaintext.
    pub async fn update_user(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> UserServiceResult<User> {
        let password_hash = request
            .password
            .as_deref()
            .map(|password| hash_password_with_cost(password, self.bcrypt_cost))
            .transpose()?;

        let changes = UserChanges {
            name: request.name,
            email: request.email,
            password_hash,
        };

        self.store
            .update(id, changes)
            .await?
            .ok_or(UserServiceError::UserNotFound)
    }

    /// Deletes a user and returns the affected-row count
    pub async fn delete_user(&self, id: Uuid) -> UserServiceResult<u64> {
        let removed = self.store.delete(id).await?;

        if removed == 0 {
            return Err(UserServiceError::UserNotFound);
        }

        Ok(removed)
    }

    /// Health check for the service
    pub async fn health_check(&self) -> UserServiceResult<()> {
        self.store.ping().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryUserStore;
    use crate::utils::security::verify_password;

    const TEST_COST: u32 = 4;

    fn service_with_store() -> (UserService, Arc<MemoryUserStore>) {
        let store = Arc::new(MemoryUserStore::new());
        let service = UserService::with_bcrypt_cost(store.clone(), TEST_COST);
        (service, store)
    }

    fn create_request(name: &str, email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let (service, store) = service_with_store();

        let user = service
            .create_user(create_request("Ana", "ana@example.com", "plain-secret"))
            .await
            .unwrap();

        let stored = store.stored_password_hash(user.id).unwrap();
        assert_ne!(stored, "plain-secret");
        assert!(verify_password("plain-secret", &stored).unwrap());
        assert!(!verify_password("other-secret", &stored).unwrap());
    }

    #[tokio::test]
    async fn test_list_users_empty_filter_and_no_matches() {
        let (service, _store) = service_with_store();

        let all = service.list_users(&ListUsersQuery::default()).await.unwrap();
        assert!(all.is_empty());

        service
            .create_user(create_request("Ana", "ana@example.com", "pw"))
            .await
            .unwrap();

        let all = service.list_users(&ListUsersQuery::default()).await.unwrap();
        assert_eq!(all.len(), 1);

        let none = service
            .list_users(&ListUsersQuery {
                name: Some("Nobody".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_get_user_includes_contact_info() {
        let (service, store) = service_with_store();
        let user = service
            .create_user(create_request("Ana", "ana@example.com", "pw"))
            .await
            .unwrap();
        store.insert_contact(user.id, Some("555-0100"), Some("Calle Mayor 1"), None);

        let found = service.get_user(user.id).await.unwrap();
        assert_eq!(found.user.id, user.id);
        assert_eq!(
            found.contact_info.unwrap().phone.as_deref(),
            Some("555-0100")
        );
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let (service, _store) = service_with_store();

        let err = service.get_user(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, UserServiceError::UserNotFound));
    }

    #[tokio::test]
    async fn test_get_profile_includes_favorites() {
        let (service, store) = service_with_store();
        let user = service
            .create_user(create_request("Ana", "ana@example.com", "pw"))
            .await
            .unwrap();
        let joke = store.insert_joke("A chicken walks into a library", None);
        store.favorite_joke(user.id, joke.id);

        let profile = service.get_profile(user.id).await.unwrap();
        assert_eq!(profile.favorite_jokes.len(), 1);
        assert_eq!(profile.favorite_jokes[0].content, joke.content);
    }

    #[tokio::test]
    async fn test_update_user_returns_persisted_row() {
        let (service, _store) = service_with_store();
        let user = service
            .create_user(create_request("Ana", "ana@example.com", "pw"))
            .await
            .unwrap();

        let updated = service
            .update_user(
                user.id,
                UpdateUserRequest {
                    name: Some("Ana Maria".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.email, "ana@example.com");

        // The persisted row reflects the change on a fresh read
        let reread = service.get_user(user.id).await.unwrap();
        assert_eq!(reread.user.name, "Ana Maria");
    }

    #[tokio::test]
    async fn test_update_user_hashes_password_when_present() {
        let (service, store) = service_with_store();
        let user = service
            .create_user(create_request("Ana", "ana@example.com", "first-pw"))
            .await
            .unwrap();
        let original_hash = store.stored_password_hash(user.id).unwrap();

        service
            .update_user(
                user.id,
                UpdateUserRequest {
                    password: Some("second-pw".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let rotated = store.stored_password_hash(user.id).unwrap();
        assert_ne!(rotated, original_hash);
        assert_ne!(rotated, "second-pw");
        assert!(verify_password("second-pw", &rotated).unwrap());
        assert!(!verify_password("first-pw", &rotated).unwrap());
    }

    #[tokio::test]
    async fn test_update_user_without_password_keeps_digest() {
        let (service, store) = service_with_store();
        let user = service
            .create_user(create_request("Ana", "ana@example.com", "pw"))
            .await
            .unwrap();
        let original_hash = store.stored_password_hash(user.id).unwrap();

        service
            .update_user(
                user.id,
                UpdateUserRequest {
                    email: Some("ana.maria@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(store.stored_password_hash(user.id).unwrap(), original_hash);
    }

    #[tokio::test]
    async fn test_update_user_not_found_changes_nothing() {
        let (service, store) = service_with_store();
        service
            .create_user(create_request("Ana", "ana@example.com", "pw"))
            .await
            .unwrap();

        let err = service
            .update_user(
                Uuid::new_v4(),
                UpdateUserRequest {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, UserServiceError::UserNotFound));
        assert_eq!(store.user_count(), 1);
        let all = service.list_users(&ListUsersQuery::default()).await.unwrap();
        assert_eq!(all[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_delete_user_then_lookup_fails() {
        let (service, _store) = service_with_store();
        let user = service
            .create_user(create_request("Ana", "ana@example.com", "pw"))
            .await
            .unwrap();

        let removed = service.delete_user(user.id).await.unwrap();
        assert_eq!(removed, 1);

        let err = service.get_user(user.id).await.unwrap_err();
        assert!(matches!(err, UserServiceError::UserNotFound));

        let err = service.delete_user(user.id).await.unwrap_err();
        assert!(matches!(err, UserServiceError::UserNotFound));
    }

    #[tokio::test]
    async fn test_health_check() {
        let (service, _store) = service_with_store();
        assert!(service.health_check().await.is_ok());
    }
}
