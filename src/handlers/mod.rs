//! HTTP handlers: entity CRUD, favorites, users.

pub mod entity;
pub mod favorite;
pub mod user;

use crate::error::AppError;

/// Parse a path id segment. Non-numeric ids never reach the services.
pub(crate) fn parse_id(segment: &str) -> Result<i64, AppError> {
    segment
        .parse()
        .map_err(|_| AppError::Validation("invalid id".into()))
}
