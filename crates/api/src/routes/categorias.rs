//! Route definitions for the `/categorias` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::categorias;
use crate::state::AppState;

/// Routes mounted at `/categorias`.
///
/// ```text
/// GET    /       -> list (active only)
/// POST   /       -> create
/// PUT    /{id}   -> update
/// DELETE /{id}   -> soft delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categorias::list).post(categorias::create))
        .route(
            "/{id}",
            put(categorias::update).delete(categorias::delete),
        )
}
