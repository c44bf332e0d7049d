//! Catalog routes: the four entity kinds, favorites, and user endpoints.
//! Static segments (/user, /users, /users/favorites/:user_id) take routing
//! priority over the :entity captures, so the users endpoints keep their
//! richer contract while /:entity serves the generic one.

use crate::handlers::{entity, favorite, user};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/user", get(user::hello))
        .route("/users", get(user::list_users).post(user::create_user))
        .route("/users/favorites/:user_id", get(favorite::list_for_user))
        .route("/:entity", get(entity::list).post(entity::create))
        .route("/:entity/:id", get(entity::read))
        .route(
            "/favorite/:entity/:entity_id/:user_id",
            post(favorite::add).delete(favorite::remove),
        )
        .route(
            "/favorite/:entity/:entity_id",
            post(favorite::add_for_caller).delete(favorite::remove_for_caller),
        )
        .with_state(state)
}
