//! Route definitions for the `/usuarios` resource (also mounted as
//! `/modulo_user` for older dashboard builds).

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::usuarios;
use crate::state::AppState;

/// Routes mounted at `/usuarios`.
///
/// ```text
/// GET    /        -> list (active only, joined with role)
/// POST   /        -> create
/// GET    /roles   -> active roles
/// PUT    /{id}    -> partial update
/// DELETE /{id}    -> soft delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(usuarios::list).post(usuarios::create))
        .route("/roles", get(usuarios::list_roles))
        .route("/{id}", put(usuarios::update).delete(usuarios::delete))
}
