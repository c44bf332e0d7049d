//! Holocron: Star Wars catalog REST backend (entities plus user favorites).

pub mod catalog;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use catalog::{EntityKind, FavoriteKind};
pub use error::AppError;
pub use routes::{catalog_routes, common_routes};
pub use service::{EntityService, FavoriteRef, FavoriteService, NewUser, UserService};
pub use state::AppState;
pub use store::{
    connect_pool, database_url, ensure_database_exists, ensure_tables, install_default_drivers,
    StorageBackend,
};
