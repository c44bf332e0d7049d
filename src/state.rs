//! Shared application state: the storage handle injected into every handler.

use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
}
