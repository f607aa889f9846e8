//! Caller Identity Middleware
//!
//! The authentication layer itself lives upstream of this service; the
//! gateway verifies the session and forwards the caller's id in the
//! `x-user-id` header. The middleware here consumes that output, turning it
//! into an [`AuthUser`] request extension, and the extractor hands it to
//! handlers as an explicit argument rather than an ambient side channel.

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::utils::error::AppError;

/// Header populated by the upstream auth layer with the verified user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated caller identity attached to the request
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// Id of the authenticated user
    pub user_id: Uuid,
}

/// Reads the upstream identity header and stores it in request extensions
///
/// Requests without a parseable header pass through untouched; handlers that
/// require identity reject them through the [`AuthUser`] extractor.
pub async fn identity_middleware(mut request: Request, next: Next) -> Response {
    let user_id = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok());

    if let Some(user_id) = user_id {
        request.extensions_mut().insert(AuthUser { user_id });
    }

    next.run(request).await
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().copied().ok_or_else(|| {
            AppError::Authentication("No authenticated user attached to request".to_string())
        })
    }
}
