//! Favorite handlers. Two addressing contracts are mounted: the explicit
//! user id in the path, and the authenticated caller from the request.

use super::parse_id;
use crate::catalog::FavoriteKind;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::response;
use crate::service::FavoriteService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// POST /favorite/:entity/:entity_id/:user_id
pub async fn add(
    State(state): State<AppState>,
    Path((segment, entity_id, user_id)): Path<(String, String, String)>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let kind = FavoriteKind::from_path(&segment)?;
    let entity_id = parse_id(&entity_id)?;
    let user_id = parse_id(&user_id)?;
    FavoriteService::add(&state.pool, user_id, kind, entity_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(response::message(format!("Favorite {} added successfully", kind))),
    ))
}

/// DELETE /favorite/:entity/:entity_id/:user_id
pub async fn remove(
    State(state): State<AppState>,
    Path((segment, entity_id, user_id)): Path<(String, String, String)>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let kind = FavoriteKind::from_path(&segment)?;
    let entity_id = parse_id(&entity_id)?;
    let user_id = parse_id(&user_id)?;
    FavoriteService::remove(&state.pool, user_id, kind, entity_id).await?;
    Ok((
        StatusCode::OK,
        Json(response::message(format!("Favorite {} removed successfully", kind))),
    ))
}

/// POST /favorite/:entity/:entity_id — caller identity from the request.
pub async fn add_for_caller(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path((segment, entity_id)): Path<(String, String)>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let kind = FavoriteKind::from_path(&segment)?;
    let entity_id = parse_id(&entity_id)?;
    FavoriteService::add(&state.pool, user_id, kind, entity_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(response::message(format!("Favorite {} added successfully", kind))),
    ))
}

/// DELETE /favorite/:entity/:entity_id — caller identity from the request.
pub async fn remove_for_caller(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path((segment, entity_id)): Path<(String, String)>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let kind = FavoriteKind::from_path(&segment)?;
    let entity_id = parse_id(&entity_id)?;
    FavoriteService::remove(&state.pool, user_id, kind, entity_id).await?;
    Ok((
        StatusCode::OK,
        Json(response::message(format!("Favorite {} removed successfully", kind))),
    ))
}

/// GET /users/favorites/:user_id
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let user_id = parse_id(&user_id)?;
    let favorites = FavoriteService::list_for_user(&state.pool, user_id).await?;
    Ok((StatusCode::OK, Json(favorites)))
}
