//! The closed catalog model: entity tags and their schema table.

pub mod kind;
pub mod schema;

pub use kind::{EntityKind, FavoriteKind};
pub use schema::{ColumnSpec, EntitySchema, FieldFormat, FieldType};
