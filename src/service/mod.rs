//! Service layer: storage-facing operations behind the handlers.

pub mod entity;
pub mod favorite;
pub mod user;
pub mod validation;

pub use entity::EntityService;
pub use favorite::{FavoriteRef, FavoriteService};
pub use user::{NewUser, UserService};
pub use validation::RequestValidator;

use crate::error::AppError;

/// Map a unique-constraint violation to Conflict; everything else stays a
/// storage error. The constraints hold the invariants under concurrent
/// writers, so this is the backstop behind every pre-check.
pub(crate) fn conflict_on_unique(e: sqlx::Error, message: impl Into<String>) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(message.into()),
        _ => AppError::Db(e),
    }
}
