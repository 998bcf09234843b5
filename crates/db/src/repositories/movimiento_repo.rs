//! Repository for `movimientos_inventario` and its `tipos_movimiento`
//! reference table.
//!
//! [`MovimientoRepo::register`] is the only write path for movements and the
//! only code allowed to mutate `productos.stock_actual`.

use almacen_core::stock::StockEffect;
use almacen_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::error::MovementError;
use crate::models::movimiento::{
    MovimientoListado, NuevoMovimiento, TipoMovimiento, TopSalida,
};

/// Joined column list for movement history queries.
const LIST_COLUMNS: &str = "m.id_movimiento, m.id_producto, p.nombre_producto, \
    p.codigo_producto, m.id_tipo_movimiento, tm.nombre_tipo AS tipo_movimiento, \
    m.cantidad, m.fecha_movimiento, m.id_usuario_responsable, \
    u.nombre_completo AS responsable, m.motivo, m.lote_afectado, \
    m.observaciones, m.fecha_registro";

/// Provides the movement transaction and read queries over movement history.
pub struct MovimientoRepo;

impl MovimientoRepo {
    /// Atomically record a movement batch and adjust stock.
    ///
    /// Runs entirely inside one transaction:
    /// 1. Resolve the movement type; deactivated or unknown types are
    ///    rejected before any row is touched.
    /// 2. For decrementing types, lock each product row (`FOR UPDATE`) and
    ///    verify sufficient stock. Locks are held until commit, so two
    ///    concurrent decrements on the same product serialize and the
    ///    second one re-checks against the committed stock.
    /// 3. Insert one movement row per line item, in submission order, and
    ///    apply the stock delta for incrementing/decrementing types.
    ///
    /// Any error returns early; dropping the transaction guard rolls back
    /// every insert and stock update of the batch.
    ///
    /// Returns the number of affected products (line items written).
    pub async fn register(
        pool: &PgPool,
        input: &NuevoMovimiento,
    ) -> Result<usize, MovementError> {
        let mut tx = pool.begin().await?;

        let afecta_stock: Option<String> = sqlx::query_scalar(
            "SELECT afecta_stock FROM tipos_movimiento \
             WHERE id_tipo_movimiento = $1 AND activo = TRUE",
        )
        .bind(input.id_tipo_movimiento)
        .fetch_optional(&mut *tx)
        .await?;

        let effect = afecta_stock
            .as_deref()
            .and_then(StockEffect::parse)
            .ok_or(MovementError::InvalidMovementType)?;

        // Pre-check pass for outgoing stock: lock every affected product row
        // and verify the batch can be satisfied before writing anything.
        if effect == StockEffect::Decrementa {
            for detalle in &input.detalles {
                if detalle.cantidad <= 0 {
                    return Err(MovementError::InvalidLineItem);
                }

                let stock_actual: Option<i32> = sqlx::query_scalar(
                    "SELECT stock_actual FROM productos WHERE id_producto = $1 FOR UPDATE",
                )
                .bind(detalle.id_producto)
                .fetch_optional(&mut *tx)
                .await?;

                let stock_actual = stock_actual.ok_or(MovementError::ProductNotFound {
                    producto: detalle.id_producto,
                })?;

                if stock_actual < detalle.cantidad {
                    return Err(MovementError::InsufficientStock {
                        producto: detalle.id_producto,
                    });
                }
            }
        }

        // Write pass: movement rows plus stock deltas, in submission order.
        for detalle in &input.detalles {
            if detalle.cantidad <= 0 {
                return Err(MovementError::InvalidLineItem);
            }

            sqlx::query(
                "INSERT INTO movimientos_inventario \
                    (id_producto, id_tipo_movimiento, cantidad, fecha_movimiento, \
                     id_usuario_responsable, motivo, lote_afectado, observaciones) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            )
            .bind(detalle.id_producto)
            .bind(input.id_tipo_movimiento)
            .bind(detalle.cantidad)
            .bind(input.fecha_movimiento)
            .bind(input.id_usuario_responsable)
            .bind(&input.motivo)
            .bind(&detalle.lote_afectado)
            .bind(&input.observaciones)
            .execute(&mut *tx)
            .await?;

            let delta_sql = match effect {
                StockEffect::Incrementa => {
                    "UPDATE productos SET stock_actual = stock_actual + $1 WHERE id_producto = $2"
                }
                StockEffect::Decrementa => {
                    "UPDATE productos SET stock_actual = stock_actual - $1 WHERE id_producto = $2"
                }
                StockEffect::NoAfecta => continue,
            };

            sqlx::query(delta_sql)
                .bind(detalle.cantidad)
                .bind(detalle.id_producto)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::debug!(
            id_tipo_movimiento = input.id_tipo_movimiento,
            productos_afectados = input.detalles.len(),
            "Movimiento registrado"
        );
        Ok(input.detalles.len())
    }

    /// List active movement types ordered by name.
    pub async fn list_tipos(pool: &PgPool) -> Result<Vec<TipoMovimiento>, sqlx::Error> {
        sqlx::query_as::<_, TipoMovimiento>(
            "SELECT id_tipo_movimiento AS id, nombre_tipo, descripcion, afecta_stock \
             FROM tipos_movimiento \
             WHERE activo = TRUE \
             ORDER BY nombre_tipo",
        )
        .fetch_all(pool)
        .await
    }

    /// Movement history, newest registrations first. `tipo` filters on the
    /// type's stock effect (`Incrementa` / `Decrementa` / `No_Afecta`).
    pub async fn list(
        pool: &PgPool,
        tipo: Option<&str>,
    ) -> Result<Vec<MovimientoListado>, sqlx::Error> {
        let base = format!(
            "SELECT {LIST_COLUMNS} \
             FROM movimientos_inventario m \
             INNER JOIN productos p ON m.id_producto = p.id_producto \
             INNER JOIN tipos_movimiento tm \
                ON m.id_tipo_movimiento = tm.id_tipo_movimiento \
             INNER JOIN usuarios u ON m.id_usuario_responsable = u.id_usuario"
        );

        match tipo {
            Some(efecto) => {
                let query = format!(
                    "{base} WHERE tm.afecta_stock = $1 ORDER BY m.fecha_registro DESC"
                );
                sqlx::query_as::<_, MovimientoListado>(&query)
                    .bind(efecto)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("{base} ORDER BY m.fecha_registro DESC");
                sqlx::query_as::<_, MovimientoListado>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Products ranked by total decremented quantity, optionally restricted
    /// to a movement-date range.
    pub async fn top_salidas(
        pool: &PgPool,
        limit: i64,
        range: Option<(Date, Date)>,
    ) -> Result<Vec<TopSalida>, sqlx::Error> {
        let base = "SELECT p.id_producto, p.codigo_producto, p.nombre_producto, \
                SUM(m.cantidad)::BIGINT AS total_salidas \
             FROM movimientos_inventario m \
             INNER JOIN productos p ON m.id_producto = p.id_producto \
             INNER JOIN tipos_movimiento tm \
                ON m.id_tipo_movimiento = tm.id_tipo_movimiento \
             WHERE tm.afecta_stock = 'Decrementa'";
        let tail = "GROUP BY p.id_producto, p.codigo_producto, p.nombre_producto \
             ORDER BY total_salidas DESC \
             LIMIT $1";

        match range {
            Some((from, to)) => {
                let query =
                    format!("{base} AND m.fecha_movimiento BETWEEN $2 AND $3 {tail}");
                sqlx::query_as::<_, TopSalida>(&query)
                    .bind(limit)
                    .bind(from)
                    .bind(to)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("{base} {tail}");
                sqlx::query_as::<_, TopSalida>(&query)
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
        }
    }
}
