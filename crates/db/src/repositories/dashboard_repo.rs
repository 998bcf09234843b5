//! Aggregate queries backing the dashboard summary.

use almacen_core::types::Date;
use chrono::{Datelike, Utc};
use sqlx::PgPool;

use crate::models::dashboard::DashboardStats;

/// Provides the dashboard aggregate query.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute the month-scoped summary figures in one round trip.
    ///
    /// `ingresos_mes_anterior` is reported as the constant 0 the dashboard
    /// has always shown; the previous-month range only scopes `salidas`.
    pub async fn fetch_stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let today = Utc::now().date_naive();
        let (curr_from, curr_to) = month_range(today);
        let (prev_from, prev_to) = prev_month_range(today);

        sqlx::query_as::<_, DashboardStats>(
            "SELECT \
                (SELECT COALESCE(SUM(p.precio_unitario * p.stock_actual), 0) \
                 FROM productos p \
                 WHERE p.estado = 'Activo') AS ingresos_mes, \
                0::DOUBLE PRECISION AS ingresos_mes_anterior, \
                (SELECT COALESCE(SUM(m.cantidad), 0)::BIGINT \
                 FROM movimientos_inventario m \
                 INNER JOIN tipos_movimiento tm \
                    ON m.id_tipo_movimiento = tm.id_tipo_movimiento \
                 WHERE tm.afecta_stock = 'Decrementa' \
                   AND m.fecha_movimiento BETWEEN $1 AND $2) AS salidas_mes, \
                (SELECT COALESCE(SUM(m.cantidad), 0)::BIGINT \
                 FROM movimientos_inventario m \
                 INNER JOIN tipos_movimiento tm \
                    ON m.id_tipo_movimiento = tm.id_tipo_movimiento \
                 WHERE tm.afecta_stock = 'Decrementa' \
                   AND m.fecha_movimiento BETWEEN $3 AND $4) AS salidas_mes_anterior, \
                (SELECT COUNT(*) FROM productos WHERE estado = 'Activo') \
                    AS productos_activos, \
                (SELECT COUNT(*) FROM productos \
                 WHERE estado = 'Activo' AND stock_actual <= stock_minimo) \
                    AS stock_critico",
        )
        .bind(curr_from)
        .bind(curr_to)
        .bind(prev_from)
        .bind(prev_to)
        .fetch_one(pool)
        .await
    }
}

/// First and last day of the month containing `date`.
fn month_range(date: Date) -> (Date, Date) {
    let first = date.with_day(1).expect("day 1 always valid");
    let next_first = if first.month() == 12 {
        Date::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        Date::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .expect("first of month always valid");
    (first, next_first.pred_opt().expect("not the minimum date"))
}

/// First and last day of the month before the one containing `date`.
fn prev_month_range(date: Date) -> (Date, Date) {
    let first = date.with_day(1).expect("day 1 always valid");
    let prev_last = first.pred_opt().expect("not the minimum date");
    month_range(prev_last)
}
