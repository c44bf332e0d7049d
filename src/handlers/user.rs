//! User handlers: greeting, full listing, typed creation.

use crate::catalog::EntityKind;
use crate::error::AppError;
use crate::response;
use crate::service::{EntityService, NewUser, UserService};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

/// GET /user — static greeting, no data access.
pub async fn hello() -> Json<response::MessageBody> {
    Json(response::message("Hello, this is your GET /user response"))
}

/// GET /users — every user, fully serialized (never the password).
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = EntityService::list_full(&state.pool, EntityKind::Users).await?;
    Ok((StatusCode::OK, Json(rows)))
}

/// POST /users — create a user, optionally with inline favorites.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let new_user: NewUser = serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("invalid user payload: {}", e)))?;
    let id = UserService::create(&state.pool, &new_user).await?;
    Ok((
        StatusCode::CREATED,
        Json(response::created(
            "User created and favorites associated successfully",
            id,
        )),
    ))
}
