//! Repository for the `reportes` archive table.

use almacen_core::types::DbId;
use sqlx::PgPool;

use crate::models::reporte::{CreateReporte, ReporteArchivo, ReporteResumen};

/// Metadata column list; list queries never pull the PDF blob.
const SUMMARY_COLUMNS: &str = "id_reporte, tipo_reporte, id_usuario_generador, \
    parametros, fecha_generacion, nombre_archivo, tamano_bytes";

/// Provides append-only operations for archived reports.
pub struct ReporteRepo;

impl ReporteRepo {
    /// Most recent reports, metadata only.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<ReporteResumen>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM reportes \
             ORDER BY fecha_generacion DESC LIMIT $1"
        );
        sqlx::query_as::<_, ReporteResumen>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Most recent reports filtered by type and/or the `subtipo` key inside
    /// the stored generation parameters.
    pub async fn list_filtered(
        pool: &PgPool,
        limit: i64,
        tipo: Option<&str>,
        subtipo: Option<&str>,
    ) -> Result<Vec<ReporteResumen>, sqlx::Error> {
        let mut query = format!("SELECT {SUMMARY_COLUMNS} FROM reportes WHERE TRUE");
        if tipo.is_some() {
            query.push_str(" AND tipo_reporte = $2");
        }
        if subtipo.is_some() {
            let idx = if tipo.is_some() { 3 } else { 2 };
            query.push_str(&format!(" AND parametros->>'subtipo' = ${idx}"));
        }
        query.push_str(" ORDER BY fecha_generacion DESC LIMIT $1");

        let mut q = sqlx::query_as::<_, ReporteResumen>(&query).bind(limit);
        if let Some(t) = tipo {
            q = q.bind(t);
        }
        if let Some(s) = subtipo {
            q = q.bind(s);
        }
        q.fetch_all(pool).await
    }

    /// Archive a generated report, returning its ID.
    pub async fn create(pool: &PgPool, input: &CreateReporte) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO reportes \
                (tipo_reporte, id_usuario_generador, parametros, nombre_archivo, \
                 archivo_pdf, tipo_mime, tamano_bytes, hash_archivo, estado_generacion) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'Completado') \
             RETURNING id_reporte",
        )
        .bind(&input.tipo_reporte)
        .bind(input.id_usuario_generador)
        .bind(&input.parametros)
        .bind(&input.nombre_archivo)
        .bind(&input.archivo_pdf)
        .bind(&input.tipo_mime)
        .bind(input.tamano_bytes)
        .bind(&input.hash_archivo)
        .fetch_one(pool)
        .await
    }

    /// Fetch the stored file for download.
    pub async fn find_archivo(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ReporteArchivo>, sqlx::Error> {
        sqlx::query_as::<_, ReporteArchivo>(
            "SELECT nombre_archivo, archivo_pdf, tipo_mime, tamano_bytes \
             FROM reportes WHERE id_reporte = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
