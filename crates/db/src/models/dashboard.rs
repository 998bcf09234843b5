//! Dashboard aggregate figures.

use serde::Serialize;
use sqlx::FromRow;

/// The summary payload of `GET /api/dashboard/stats`.
///
/// `ingresos_mes` is the current inventory valuation (unit price x stock over
/// active products); `ingresos_mes_anterior` has always been reported as 0 by
/// the dashboard and is preserved as such. The `salidas_*` figures sum the
/// quantities of decrementing movements in the current and previous month.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DashboardStats {
    pub ingresos_mes: f64,
    pub ingresos_mes_anterior: f64,
    pub salidas_mes: i64,
    pub salidas_mes_anterior: i64,
    pub productos_activos: i64,
    pub stock_critico: i64,
}
