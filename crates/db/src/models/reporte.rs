//! Report archive models and DTOs.
//!
//! Reports are append-only archival records: metadata plus the generated
//! PDF bytes. List projections never carry the blob.

use almacen_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Report metadata row returned by the list endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReporteResumen {
    pub id_reporte: DbId,
    pub tipo_reporte: String,
    pub id_usuario_generador: DbId,
    pub parametros: Option<serde_json::Value>,
    pub fecha_generacion: Timestamp,
    pub nombre_archivo: String,
    pub tamano_bytes: i64,
}

/// The stored file for `GET /api/reportes/{id}/pdf`.
#[derive(Debug, Clone, FromRow)]
pub struct ReporteArchivo {
    pub nombre_archivo: String,
    pub archivo_pdf: Vec<u8>,
    pub tipo_mime: String,
    pub tamano_bytes: i64,
}

/// DTO for archiving a generated report. The handler decodes the upload,
/// hashes it, and fills every field before insert.
#[derive(Debug)]
pub struct CreateReporte {
    pub tipo_reporte: String,
    pub id_usuario_generador: DbId,
    pub parametros: Option<serde_json::Value>,
    pub nombre_archivo: String,
    pub archivo_pdf: Vec<u8>,
    pub tipo_mime: String,
    pub tamano_bytes: i64,
    pub hash_archivo: String,
}
