//! Route definitions for the `/productos` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::productos;
use crate::state::AppState;

/// Routes mounted at `/productos`.
///
/// ```text
/// GET    /              -> list (active only)
/// POST   /              -> create
/// GET    /categorias    -> category options for the form
/// GET    /proveedores   -> active brand names
/// PUT    /{id}          -> update
/// DELETE /{id}          -> soft delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(productos::list).post(productos::create))
        .route("/categorias", get(productos::list_categorias))
        .route("/proveedores", get(productos::list_proveedores))
        .route(
            "/{id}",
            put(productos::update).delete(productos::delete),
        )
}
