//! Entity tags. Routing works on path segments; everything past the router
//! works on these closed enums, so an unrecognized segment is rejected once,
//! at parse time.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four resource kinds exposed by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Users,
    Planets,
    Characters,
    Starships,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Users,
        EntityKind::Planets,
        EntityKind::Characters,
        EntityKind::Starships,
    ];

    /// Resolve a path segment to a kind.
    pub fn from_path(segment: &str) -> Result<Self, AppError> {
        match segment {
            "users" => Ok(EntityKind::Users),
            "planets" => Ok(EntityKind::Planets),
            "characters" => Ok(EntityKind::Characters),
            "starships" => Ok(EntityKind::Starships),
            _ => Err(AppError::InvalidResource("Invalid entity".into())),
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Planets => "planets",
            EntityKind::Characters => "characters",
            EntityKind::Starships => "starships",
        }
    }

    /// Singular display name for confirmation and error messages.
    pub fn display(&self) -> &'static str {
        match self {
            EntityKind::Users => "User",
            EntityKind::Planets => "Planet",
            EntityKind::Characters => "Character",
            EntityKind::Starships => "Starship",
        }
    }
}

/// Entity kinds a user may favorite. Users cannot be favorited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Planets,
    Characters,
    Starships,
}

impl FavoriteKind {
    pub fn from_path(segment: &str) -> Result<Self, AppError> {
        match segment {
            "planets" => Ok(FavoriteKind::Planets),
            "characters" => Ok(FavoriteKind::Characters),
            "starships" => Ok(FavoriteKind::Starships),
            _ => Err(AppError::InvalidResource("Invalid entity for favorite".into())),
        }
    }

    /// Value stored in the ledger's `favorite_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteKind::Planets => "planets",
            FavoriteKind::Characters => "characters",
            FavoriteKind::Starships => "starships",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
