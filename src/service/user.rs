//! User creation: typed payload, optional inline favorites, one transaction.

use super::FavoriteRef;
use crate::error::AppError;
use serde::Deserialize;
use sqlx::{AnyPool, Row};

/// POST /users payload. `is_active` defaults to true at the storage layer;
/// inline favorites are inserted atomically with the user.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub favorites: Vec<FavoriteRef>,
}

pub struct UserService;

impl UserService {
    /// Insert the user and any inline favorites; returns the new user id.
    /// Rolls back entirely if any favorite collides.
    pub async fn create(pool: &AnyPool, new_user: &NewUser) -> Result<i64, AppError> {
        if !new_user.email.contains('@') || new_user.email.len() < 3 {
            return Err(AppError::Validation("email must be a valid email".into()));
        }
        let mut tx = pool.begin().await?;
        let row = sqlx::query(
            "INSERT INTO users (email, password, is_active, username) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(new_user.email.clone())
        .bind(new_user.password.clone())
        .bind(new_user.is_active.unwrap_or(true))
        .bind(new_user.username.clone())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| super::conflict_on_unique(e, "User already exists"))?;
        let user_id: i64 = row.try_get(0)?;

        for fav in &new_user.favorites {
            let created_at = chrono::Utc::now().to_rfc3339();
            sqlx::query(
                "INSERT INTO favorites (user_id, favorite_type, favorite_id, created_at) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(user_id)
            .bind(fav.kind.as_str())
            .bind(fav.id)
            .bind(created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                super::conflict_on_unique(e, format!("Favorite {} already exists", fav.kind))
            })?;
        }

        tx.commit().await?;
        Ok(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_defaults_are_applied() {
        let user: NewUser = serde_json::from_value(json!({
            "email": "luke@rebellion.org",
            "password": "bluemilk",
        }))
        .unwrap();
        assert!(user.is_active.is_none());
        assert!(user.username.is_none());
        assert!(user.favorites.is_empty());
    }

    #[test]
    fn inline_favorites_deserialize_with_type_tag() {
        let user: NewUser = serde_json::from_value(json!({
            "email": "han@falcon.sw",
            "password": "kessel12",
            "favorites": [{"type": "starships", "id": 4}],
        }))
        .unwrap();
        assert_eq!(user.favorites.len(), 1);
        assert_eq!(user.favorites[0].id, 4);
    }

    #[test]
    fn unknown_favorite_type_is_rejected_at_parse_time() {
        let result: Result<NewUser, _> = serde_json::from_value(json!({
            "email": "lando@cloudcity.sw",
            "password": "sabacc",
            "favorites": [{"type": "moons", "id": 1}],
        }));
        assert!(result.is_err());
    }
}
