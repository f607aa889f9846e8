//! HTTP Request Handlers
//!
//! Axum handlers for the user controller operations. Each handler makes one
//! service call and wraps the outcome in the `{message, result}` envelope;
//! failures are converted through [`AppError`] so a request produces exactly
//! one response.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    api::middleware::AuthUser,
    models::{
        CreateUserRequest, HealthCheckResponse, ListUsersQuery, UpdateUserRequest, User,
        UserProfile, UserWithContact,
    },
    service::UserService,
    utils::error::{AppError, AppResult},
    VERSION,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

/// Standard response envelope for every operation
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub result: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: &str, result: T) -> Self {
        Self {
            message: message.to_string(),
            result,
        }
    }
}

/// List users matching the allow-listed query filter
///
/// An empty filter returns all users; zero matches is 200 with an empty
/// list, never 404.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<(StatusCode, Json<ApiResponse<Vec<User>>>)> {
    let users = state
        .user_service
        .list_users(&query)
        .await
        .map_err(|err| AppError::from_service(err, "Error getting all users"))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("All Users fetched", users)),
    ))
}

/// Get one user by id with contact info eager-loaded
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserWithContact>>)> {
    let user = state
        .user_service
        .get_user(user_id)
        .await
        .map_err(|err| AppError::from_service(err, "Error getting one user"))?;

    Ok((StatusCode::OK, Json(ApiResponse::new("User fetched", user))))
}

/// Get the authenticated caller's own profile
///
/// Identity comes from the extracted [`AuthUser`], not a path parameter;
/// contact info and the favorited jokes collection are eager-loaded.
pub async fn get_own_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<(StatusCode, Json<ApiResponse<UserProfile>>)> {
    let profile = state
        .user_service
        .get_profile(auth_user.user_id)
        .await
        .map_err(|err| AppError::from_service(err, "Error getting one user"))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("User fetched", profile)),
    ))
}

/// Create a new user
///
/// The plaintext password in the payload is replaced with a bcrypt digest
/// before the row is inserted.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let user = state
        .user_service
        .create_user(request)
        .await
        .map_err(|err| AppError::from_service(err, "Error creating user"))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("User created", user)),
    ))
}

/// Apply a partial update to a user and return the persisted row
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let user = state
        .user_service
        .update_user(user_id, request)
        .await
        .map_err(|err| AppError::from_service(err, "Error updating user"))?;

    Ok((StatusCode::OK, Json(ApiResponse::new("User updated", user))))
}

/// Delete a user; the result is the affected-row count
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<ApiResponse<u64>>)> {
    let removed = state
        .user_service
        .delete_user(user_id)
        .await
        .map_err(|err| AppError::from_service(err, "Error deleting user"))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("User deleted", removed)),
    ))
}

/// Health check endpoint
pub async fn health_check(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<ApiResponse<HealthCheckResponse>>)> {
    state
        .user_service
        .health_check()
        .await
        .map_err(|err| AppError::from_service(err, "Error checking service health"))?;

    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: VERSION.to_string(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Service healthy", response)),
    ))
}
