//! Incident models and DTOs. Incidents are append-only and never touch stock.

use almacen_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Incident type projection returned by `GET /api/incidencias/tipos`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TipoIncidencia {
    pub id: DbId,
    pub nombre_tipo: String,
    pub descripcion: Option<String>,
}

/// Incident history row joined with product and type names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IncidenciaListado {
    pub id_incidencia: DbId,
    pub id_producto: DbId,
    pub codigo_producto: String,
    pub nombre_producto: String,
    pub lote: Option<String>,
    pub id_tipo_incidencia: DbId,
    pub tipo_incidencia: String,
    pub cantidad_afectada: i32,
    pub fecha_incidencia: Date,
    pub id_usuario_registro: DbId,
    pub descripcion_detallada: String,
    pub accion_tomada: Option<String>,
    pub fecha_registro: Timestamp,
}

/// DTO for registering an incident.
#[derive(Debug, Deserialize)]
pub struct CreateIncidencia {
    pub id_producto: DbId,
    pub id_tipo_incidencia: DbId,
    pub cantidad_afectada: i32,
    pub fecha_incidencia: Date,
    pub id_usuario_registro: DbId,
    pub descripcion_detallada: String,
    pub accion_tomada: Option<String>,
}
