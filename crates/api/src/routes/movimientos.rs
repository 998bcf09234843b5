//! Route definitions for the `/movimientos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movimientos;
use crate::state::AppState;

/// Routes mounted at `/movimientos`.
///
/// ```text
/// GET  /              -> history (?tipo=Incrementa|Decrementa|No_Afecta)
/// POST /              -> register a movement batch (atomic)
/// GET  /tipos         -> active movement types
/// GET  /top-salidas   -> most-dispatched products (?limit=&from=&to=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movimientos::list).post(movimientos::create))
        .route("/tipos", get(movimientos::list_tipos))
        .route("/top-salidas", get(movimientos::top_salidas))
}
