//! Route definitions for the `/marcas` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::marcas;
use crate::state::AppState;

/// Routes mounted at `/marcas`.
///
/// ```text
/// GET    /       -> list (active only)
/// POST   /       -> create
/// PUT    /{id}   -> update
/// DELETE /{id}   -> soft delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(marcas::list).post(marcas::create))
        .route("/{id}", put(marcas::update).delete(marcas::delete))
}
