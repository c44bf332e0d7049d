//! Entity handlers: list, create, read by id. Handlers resolve the kind
//! from the path segment and hand the storage handle to the service layer.

use super::parse_id;
use crate::catalog::EntityKind;
use crate::error::AppError;
use crate::response;
use crate::service::{EntityService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

fn body_to_map(value: Value) -> Result<HashMap<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m.into_iter().collect()),
        _ => Err(AppError::Validation("body must be a JSON object".into())),
    }
}

/// GET /:entity
pub async fn list(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let kind = EntityKind::from_path(&segment)?;
    let rows = EntityService::list(&state.pool, kind).await?;
    Ok((StatusCode::OK, Json(rows)))
}

/// POST /:entity
pub async fn create(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let kind = EntityKind::from_path(&segment)?;
    let body = body_to_map(body)?;
    RequestValidator::validate(&body, kind.schema())?;
    let id = EntityService::create(&state.pool, kind, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(response::created(
            format!("{} created successfully", kind.display()),
            id,
        )),
    ))
}

/// GET /:entity/:id
pub async fn read(
    State(state): State<AppState>,
    Path((segment, id)): Path<(String, String)>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let kind = EntityKind::from_path(&segment)?;
    let id = parse_id(&id)?;
    let row = EntityService::read(&state.pool, kind, id).await?;
    Ok((StatusCode::OK, Json(row)))
}
