pub mod auth;
pub mod categorias;
pub mod dashboard;
pub mod health;
pub mod incidencias;
pub mod marcas;
pub mod movimientos;
pub mod productos;
pub mod reportes;
pub mod usuarios;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                       login (public)
/// /auth/me                          claims of the presented token
///
/// /productos                        list, create
/// /productos/categorias             category options for the product form
/// /productos/proveedores            active brand names
/// /productos/{id}                   update, soft delete
///
/// /categorias                       list, create
/// /categorias/{id}                  update, soft delete
///
/// /marcas                           list, create
/// /marcas/{id}                      update, soft delete
///
/// /movimientos                      history (?tipo=), register batch
/// /movimientos/tipos                active movement types
/// /movimientos/top-salidas          most-dispatched products
///
/// /incidencias                      history (?limit=), register
/// /incidencias/tipos                active incident types
///
/// /reportes                         recent archive metadata (?limit=)
/// /reportes/ultimos                 filtered archive (?tipo=&subtipo=)
/// /reportes/upload                  archive a generated PDF
/// /reportes/{id}/pdf                download the stored PDF
///
/// /dashboard/stats                  cached summary figures
///
/// /usuarios                         list, create
/// /usuarios/roles                   active roles
/// /usuarios/{id}                    update, soft delete
/// /modulo_user/...                  alias of /usuarios (older dashboard builds)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/productos", productos::router())
        .nest("/categorias", categorias::router())
        .nest("/marcas", marcas::router())
        .nest("/movimientos", movimientos::router())
        .nest("/incidencias", incidencias::router())
        .nest("/reportes", reportes::router())
        .nest("/dashboard", dashboard::router())
        .nest("/usuarios", usuarios::router())
        // Older dashboard builds call the user module under this name.
        .nest("/modulo_user", usuarios::router())
}
