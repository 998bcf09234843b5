//! Route definitions for the `/incidencias` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::incidencias;
use crate::state::AppState;

/// Routes mounted at `/incidencias`.
///
/// ```text
/// GET  /        -> history (?limit=)
/// POST /        -> register an incident
/// GET  /tipos   -> active incident types
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(incidencias::list).post(incidencias::create))
        .route("/tipos", get(incidencias::list_tipos))
}
