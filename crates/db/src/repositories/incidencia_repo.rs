//! Repository for `incidencias` and its `tipos_incidencia` reference table.

use almacen_core::error::CoreError;
use almacen_core::types::DbId;
use sqlx::PgPool;

use crate::models::incidencia::{CreateIncidencia, IncidenciaListado, TipoIncidencia};

/// Errors surfaced by [`IncidenciaRepo::create`]: the referenced product,
/// user, or type failed validation, or the store errored.
#[derive(Debug, thiserror::Error)]
pub enum IncidentError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides append-only operations for incidents.
pub struct IncidenciaRepo;

impl IncidenciaRepo {
    /// List active incident types ordered by name.
    pub async fn list_tipos(pool: &PgPool) -> Result<Vec<TipoIncidencia>, sqlx::Error> {
        sqlx::query_as::<_, TipoIncidencia>(
            "SELECT id_tipo_incidencia AS id, nombre_tipo, descripcion \
             FROM tipos_incidencia \
             WHERE activo = TRUE \
             ORDER BY nombre_tipo",
        )
        .fetch_all(pool)
        .await
    }

    /// Incident history joined with product and type names, newest first.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<IncidenciaListado>, sqlx::Error> {
        sqlx::query_as::<_, IncidenciaListado>(
            "SELECT i.id_incidencia, i.id_producto, p.codigo_producto, \
                    p.nombre_producto, p.lote, i.id_tipo_incidencia, \
                    t.nombre_tipo AS tipo_incidencia, i.cantidad_afectada, \
                    i.fecha_incidencia, i.id_usuario_registro, \
                    i.descripcion_detallada, i.accion_tomada, i.fecha_registro \
             FROM incidencias i \
             INNER JOIN productos p ON i.id_producto = p.id_producto \
             INNER JOIN tipos_incidencia t \
                ON i.id_tipo_incidencia = t.id_tipo_incidencia \
             ORDER BY i.fecha_registro DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Register an incident. Validates the referenced product, user, and
    /// incident type inside one transaction so a bad reference surfaces as a
    /// clean client error instead of a foreign-key 500.
    ///
    /// Incidents never touch `productos.stock_actual`.
    pub async fn create(pool: &PgPool, input: &CreateIncidencia) -> Result<DbId, IncidentError> {
        let mut tx = pool.begin().await?;

        let producto: Option<DbId> =
            sqlx::query_scalar("SELECT id_producto FROM productos WHERE id_producto = $1")
                .bind(input.id_producto)
                .fetch_optional(&mut *tx)
                .await?;
        if producto.is_none() {
            return Err(CoreError::NotFound {
                entity: "Producto",
                id: input.id_producto,
            }
            .into());
        }

        let usuario: Option<DbId> =
            sqlx::query_scalar("SELECT id_usuario FROM usuarios WHERE id_usuario = $1")
                .bind(input.id_usuario_registro)
                .fetch_optional(&mut *tx)
                .await?;
        if usuario.is_none() {
            return Err(CoreError::Validation("Usuario no válido".to_string()).into());
        }

        let tipo: Option<DbId> = sqlx::query_scalar(
            "SELECT id_tipo_incidencia FROM tipos_incidencia \
             WHERE id_tipo_incidencia = $1 AND activo = TRUE",
        )
        .bind(input.id_tipo_incidencia)
        .fetch_optional(&mut *tx)
        .await?;
        if tipo.is_none() {
            return Err(CoreError::Validation("Tipo de incidencia no válido".to_string()).into());
        }

        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO incidencias \
                (id_producto, id_tipo_incidencia, cantidad_afectada, fecha_incidencia, \
                 id_usuario_registro, descripcion_detallada, accion_tomada) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id_incidencia",
        )
        .bind(input.id_producto)
        .bind(input.id_tipo_incidencia)
        .bind(input.cantidad_afectada)
        .bind(input.fecha_incidencia)
        .bind(input.id_usuario_registro)
        .bind(&input.descripcion_detallada)
        .bind(&input.accion_tomada)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }
}
