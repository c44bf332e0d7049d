//! Extract the authenticated caller from the request (X-User-ID header).

use crate::error::AppError;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying the caller identity on the session-style favorite routes.
pub const USER_ID_HEADER: &str = "X-User-ID";

/// The authenticated caller. Rejects with 401 when the header is absent or
/// not an integer id.
#[derive(Clone, Copy, Debug)]
pub struct CurrentUser(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .ok_or(AppError::Unauthenticated)?;
        let id: i64 = value.parse().map_err(|_| AppError::Unauthenticated)?;
        Ok(CurrentUser(id))
    }
}
