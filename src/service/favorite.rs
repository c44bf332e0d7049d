//! Favorite ledger: per-user bookmarks of catalog entities, unique per
//! (user, type, id) triple.

use crate::catalog::FavoriteKind;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use sqlx::{AnyPool, Row};

/// One ledger entry as exposed by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRef {
    #[serde(rename = "type")]
    pub kind: FavoriteKind,
    pub id: i64,
}

pub struct FavoriteService;

impl FavoriteService {
    /// Add one bookmark. The pre-check produces the friendly Conflict; the
    /// UNIQUE constraint catches the check-then-insert race.
    pub async fn add(
        pool: &AnyPool,
        user_id: i64,
        kind: FavoriteKind,
        favorite_id: i64,
    ) -> Result<(), AppError> {
        let existing = sqlx::query(
            "SELECT id FROM favorites \
             WHERE user_id = $1 AND favorite_type = $2 AND favorite_id = $3",
        )
        .bind(user_id)
        .bind(kind.as_str())
        .bind(favorite_id)
        .fetch_optional(pool)
        .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(format!("Favorite {} already exists", kind)));
        }
        let created_at = chrono::Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO favorites (user_id, favorite_type, favorite_id, created_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(kind.as_str())
        .bind(favorite_id)
        .bind(created_at)
        .execute(pool)
        .await
        .map_err(|e| super::conflict_on_unique(e, format!("Favorite {} already exists", kind)))?;
        Ok(())
    }

    /// Delete one bookmark; NotFound when the triple was never added.
    pub async fn remove(
        pool: &AnyPool,
        user_id: i64,
        kind: FavoriteKind,
        favorite_id: i64,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "DELETE FROM favorites \
             WHERE user_id = $1 AND favorite_type = $2 AND favorite_id = $3",
        )
        .bind(user_id)
        .bind(kind.as_str())
        .bind(favorite_id)
        .execute(pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Favorite {} not found", kind)));
        }
        Ok(())
    }

    /// All bookmarks for one user, insertion order.
    pub async fn list_for_user(pool: &AnyPool, user_id: i64) -> Result<Vec<FavoriteRef>, AppError> {
        let rows = sqlx::query(
            "SELECT favorite_type, favorite_id FROM favorites WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        let mut out = Vec::with_capacity(rows.len());
        for row in &rows {
            let stored: String = row.try_get("favorite_type")?;
            let id: i64 = row.try_get("favorite_id")?;
            out.push(FavoriteRef {
                kind: FavoriteKind::from_path(&stored)?,
                id,
            });
        }
        Ok(out)
    }
}
