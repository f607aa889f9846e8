//! API Route Definitions
//!
//! HTTP routes and their handlers behind a builder that can selectively
//! enable endpoints. This is useful for:
//! - Read-only deployments such as user directories
//! - Security hardening by disabling unused endpoints
//! - Environment-specific configurations

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::*;
use super::middleware::identity_middleware;

/// Builder for creating API routes with configurable endpoints
#[derive(Default)]
pub struct RouterBuilder {
    /// Whether to enable the health check endpoint (GET /health)
    health_check: bool,
    /// Whether to enable user listing (GET /users)
    list_users: bool,
    /// Whether to enable user retrieval (GET /users/{id})
    get_user: bool,
    /// Whether to enable the own-profile endpoint (GET /users/me)
    get_own_profile: bool,
    /// Whether to enable user creation (POST /users)
    create_user: bool,
    /// Whether to enable user updates (PUT /users/{id})
    update_user: bool,
    /// Whether to enable user deletion (DELETE /users/{id})
    delete_user: bool,
}

impl RouterBuilder {
    /// Creates a new router builder with all routes disabled by default
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router builder with every endpoint enabled
    pub fn with_all_routes() -> Self {
        Self {
            health_check: true,
            list_users: true,
            get_user: true,
            get_own_profile: true,
            create_user: true,
            update_user: true,
            delete_user: true,
        }
    }

    /// Creates a router builder with only the read endpoints
    ///
    /// Suitable for user-directory style deployments that must never
    /// mutate the store.
    pub fn with_readonly_routes() -> Self {
        Self {
            health_check: true,
            list_users: true,
            get_user: true,
            get_own_profile: true,
            create_user: false,
            update_user: false,
            delete_user: false,
        }
    }

    /// Enables or disables the health check endpoint
    pub fn health_check(mut self, enabled: bool) -> Self {
        self.health_check = enabled;
        self
    }

    /// Enables or disables user listing
    pub fn list_users(mut self, enabled: bool) -> Self {
        self.list_users = enabled;
        self
    }

    /// Enables or disables user retrieval by id
    pub fn get_user(mut self, enabled: bool) -> Self {
        self.get_user = enabled;
        self
    }

    /// Enables or disables the own-profile endpoint
    pub fn get_own_profile(mut self, enabled: bool) -> Self {
        self.get_own_profile = enabled;
        self
    }

    /// Enables or disables user creation
    pub fn create_user(mut self, enabled: bool) -> Self {
        self.create_user = enabled;
        self
    }

    /// Enables or disables user updates
    pub fn update_user(mut self, enabled: bool) -> Self {
        self.update_user = enabled;
        self
    }

    /// Enables or disables user deletion
    pub fn delete_user(mut self, enabled: bool) -> Self {
        self.delete_user = enabled;
        self
    }

    /// Builds the router with the enabled endpoints
    ///
    /// The identity middleware is always layered on so the own-profile
    /// handler can extract the upstream caller id.
    pub fn build(self) -> Router<AppState> {
        let mut router = Router::new();

        if self.health_check {
            router = router.route("/health", get(health_check));
        }
        if self.list_users {
            router = router.route("/users", get(list_users));
        }
        if self.create_user {
            router = router.route("/users", post(create_user));
        }
        if self.get_own_profile {
            router = router.route("/users/me", get(get_own_profile));
        }
        if self.get_user {
            router = router.route("/users/{id}", get(get_user));
        }
        if self.update_user {
            router = router.route("/users/{id}", put(update_user));
        }
        if self.delete_user {
            router = router.route("/users/{id}", delete(delete_user));
        }

        router.layer(middleware::from_fn(identity_middleware))
    }
}

/// Creates a router with every endpoint enabled
pub fn create_routes() -> Router<AppState> {
    RouterBuilder::with_all_routes().build()
}
