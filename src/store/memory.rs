//! In-Memory Store
//!
//! HashMap-backed implementation of the [`UserStore`] trait. It substitutes
//! the database in tests and mirrors the PostgreSQL behavior the controller
//! depends on: the unique email constraint, cascade deletion of contact and
//! favorites rows, and `updated_at` maintenance.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{ContactInfo, Joke, User, UserProfile, UserWithContact, UserWithPassword};

use super::{NewUser, StoreError, UserChanges, UserFilter, UserStore};

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, UserWithPassword>,
    /// Contact rows keyed by owning user id (zero-or-one per user)
    contacts: HashMap<Uuid, ContactInfo>,
    jokes: HashMap<Uuid, Joke>,
    /// Favorited joke ids per user, in insertion order
    favorites: HashMap<Uuid, Vec<Uuid>>,
}

/// In-memory user store
#[derive(Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a contact record to a user (seeding helper)
    pub fn insert_contact(
        &self,
        user_id: Uuid,
        phone: Option<&str>,
        address: Option<&str>,
        city: Option<&str>,
    ) -> ContactInfo {
        let contact = ContactInfo {
            id: Uuid::new_v4(),
            user_id,
            phone: phone.map(str::to_string),
            address: address.map(str::to_string),
            city: city.map(str::to_string),
        };

        let mut inner = self.lock();
        inner.contacts.insert(user_id, contact.clone());
        contact
    }

    /// Add a joke record (seeding helper)
    pub fn insert_joke(&self, content: &str, category: Option<&str>) -> Joke {
        let joke = Joke {
            id: Uuid::new_v4(),
            content: content.to_string(),
            category: category.map(str::to_string),
            created_at: Utc::now(),
        };

        let mut inner = self.lock();
        inner.jokes.insert(joke.id, joke.clone());
        joke
    }

    /// Mark a joke as favorited by a user (seeding helper)
    pub fn favorite_joke(&self, user_id: Uuid, joke_id: Uuid) {
        let mut inner = self.lock();
        inner.favorites.entry(user_id).or_default().push(joke_id);
    }

    /// Read back the stored digest so tests can assert hashing behavior
    pub fn stored_password_hash(&self, id: Uuid) -> Option<String> {
        let inner = self.lock();
        inner.users.get(&id).map(|user| user.password_hash.clone())
    }

    /// Number of user rows currently stored
    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("store mutex poisoned")
    }
}

impl Inner {
    fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> bool {
        self.users
            .values()
            .any(|user| user.email == email && Some(user.id) != exclude)
    }

    fn assemble_with_contact(&self, user: &UserWithPassword) -> UserWithContact {
        UserWithContact {
            user: user.clone().into(),
            contact_info: self.contacts.get(&user.id).cloned(),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError> {
        let inner = self.lock();

        let mut users: Vec<User> = inner
            .users
            .values()
            .filter(|user| {
                filter.name.as_ref().is_none_or(|name| &user.name == name)
                    && filter
                        .email
                        .as_ref()
                        .is_none_or(|email| &user.email == email)
            })
            .cloned()
            .map(User::from)
            .collect();

        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(users)
    }

    async fn find_with_contact(&self, id: Uuid) -> Result<Option<UserWithContact>, StoreError> {
        let inner = self.lock();
        Ok(inner
            .users
            .get(&id)
            .map(|user| inner.assemble_with_contact(user)))
    }

    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        let inner = self.lock();

        let Some(user) = inner.users.get(&id) else {
            return Ok(None);
        };

        let with_contact = inner.assemble_with_contact(user);
        let favorite_jokes = inner
            .favorites
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(|joke_id| inner.jokes.get(joke_id).cloned())
            .collect();

        Ok(Some(UserProfile {
            user: with_contact.user,
            contact_info: with_contact.contact_info,
            favorite_jokes,
        }))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.lock();

        if inner.email_taken(&new_user.email, None) {
            return Err(StoreError::UniqueViolation("users_email_key".to_string()));
        }

        let now = Utc::now();
        let user = UserWithPassword {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };

        inner.users.insert(user.id, user.clone());
        Ok(user.into())
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<Option<User>, StoreError> {
        let mut inner = self.lock();

        if let Some(email) = &changes.email {
            if inner.email_taken(email, Some(id)) {
                return Err(StoreError::UniqueViolation("users_email_key".to_string()));
            }
        }

        let Some(user) = inner.users.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(password_hash) = changes.password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone().into()))
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut inner = self.lock();

        if inner.users.remove(&id).is_none() {
            return Ok(0);
        }

        inner.contacts.remove(&id);
        inner.favorites.remove(&id);
        Ok(1)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "$2b$04$digestdigestdigestdigest".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_all() {
        let store = MemoryUserStore::new();

        store.create(new_user("Ana", "ana@example.com")).await.unwrap();
        store.create(new_user("Bo", "bo@example.com")).await.unwrap();

        let all = store.find_all(&UserFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let filtered = store
            .find_all(&UserFilter {
                email: Some("bo@example.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Bo");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryUserStore::new();
        store.create(new_user("Ana", "ana@example.com")).await.unwrap();

        let err = store
            .create(new_user("Other", "ana@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn test_find_with_contact_joins_contact_row() {
        let store = MemoryUserStore::new();
        let user = store.create(new_user("Ana", "ana@example.com")).await.unwrap();
        store.insert_contact(user.id, Some("555-0100"), None, Some("Madrid"));

        let found = store.find_with_contact(user.id).await.unwrap().unwrap();
        let contact = found.contact_info.unwrap();
        assert_eq!(contact.user_id, user.id);
        assert_eq!(contact.phone.as_deref(), Some("555-0100"));

        // A user without a contact row still resolves, with null contact
        let bare = store.create(new_user("Bo", "bo@example.com")).await.unwrap();
        let found = store.find_with_contact(bare.id).await.unwrap().unwrap();
        assert!(found.contact_info.is_none());
    }

    #[tokio::test]
    async fn test_find_profile_collects_favorites() {
        let store = MemoryUserStore::new();
        let user = store.create(new_user("Ana", "ana@example.com")).await.unwrap();
        let joke = store.insert_joke("Why did the crab never share?", Some("puns"));
        store.favorite_joke(user.id, joke.id);

        let profile = store.find_profile(user.id).await.unwrap().unwrap();
        assert_eq!(profile.favorite_jokes.len(), 1);
        assert_eq!(profile.favorite_jokes[0].id, joke.id);

        assert!(store.find_profile(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_partial_and_missing() {
        let store = MemoryUserStore::new();
        let user = store.create(new_user("Ana", "ana@example.com")).await.unwrap();

        let updated = store
            .update(
                user.id,
                UserChanges {
                    name: Some("Ana Maria".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.email, "ana@example.com");

        let missing = store
            .update(Uuid::new_v4(), UserChanges::default())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete_cascades_and_reports_count() {
        let store = MemoryUserStore::new();
        let user = store.create(new_user("Ana", "ana@example.com")).await.unwrap();
        store.insert_contact(user.id, None, None, None);

        assert_eq!(store.delete(user.id).await.unwrap(), 1);
        assert_eq!(store.delete(user.id).await.unwrap(), 0);
        assert!(store.find_with_contact(user.id).await.unwrap().is_none());
        assert_eq!(store.user_count(), 0);
    }
}
