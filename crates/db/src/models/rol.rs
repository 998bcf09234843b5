//! Role entity model.

use almacen_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A role row from the `roles` table.
///
/// `permisos` is an opaque permissions payload interpreted by the frontend.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rol {
    pub id_rol: DbId,
    pub nombre_rol: String,
    pub descripcion: Option<String>,
    pub permisos: serde_json::Value,
    pub activo: bool,
    pub fecha_creacion: Timestamp,
}

/// Role projection returned by `GET /api/usuarios/roles`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RolListado {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub permisos: serde_json::Value,
    pub activo: bool,
}
