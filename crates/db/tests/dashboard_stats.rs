//! Integration tests for the dashboard aggregate query.

use almacen_core::types::DbId;
use almacen_db::models::movimiento::{DetalleMovimiento, NuevoMovimiento};
use almacen_db::repositories::{DashboardRepo, MovimientoRepo};
use chrono::Utc;
use sqlx::PgPool;

async fn setup_producto(pool: &PgPool, precio: f64, stock: i32, minimo: i32) -> DbId {
    let id_categoria: DbId = sqlx::query_scalar(
        "INSERT INTO categorias (nombre_categoria) VALUES ('Stats') RETURNING id_categoria",
    )
    .fetch_one(pool)
    .await
    .expect("categoria");
    let id_marca: DbId = sqlx::query_scalar(
        "INSERT INTO marcas (nombre_marca) VALUES ('Stats') RETURNING id_marca",
    )
    .fetch_one(pool)
    .await
    .expect("marca");
    sqlx::query_scalar(
        "INSERT INTO productos \
            (codigo_producto, nombre_producto, precio_unitario, stock_actual, \
             stock_minimo, id_categoria, id_marca) \
         VALUES ('ST-1', 'Producto Stats', $1, $2, $3, $4, $5) RETURNING id_producto",
    )
    .bind(precio)
    .bind(stock)
    .bind(minimo)
    .bind(id_categoria)
    .bind(id_marca)
    .fetch_one(pool)
    .await
    .expect("producto")
}

#[sqlx::test(migrations = "./migrations")]
async fn stats_reflect_valuation_salidas_and_critical_stock(pool: PgPool) {
    let producto = setup_producto(&pool, 10.0, 8, 3).await;
    let usuario: DbId = sqlx::query_scalar(
        "INSERT INTO usuarios (nombre_completo, email, password_hash, id_rol) \
         VALUES ('Stats', 'stats@test.com', 'x', 1) RETURNING id_usuario",
    )
    .fetch_one(&pool)
    .await
    .expect("usuario");
    let salida: DbId = sqlx::query_scalar(
        "SELECT id_tipo_movimiento FROM tipos_movimiento WHERE nombre_tipo = 'Salida'",
    )
    .fetch_one(&pool)
    .await
    .expect("tipo");

    // One decrement of 2 this month: stock 8 -> 6, salidas_mes = 2.
    MovimientoRepo::register(
        &pool,
        &NuevoMovimiento {
            id_tipo_movimiento: salida,
            fecha_movimiento: Utc::now().date_naive(),
            id_usuario_responsable: usuario,
            motivo: None,
            observaciones: None,
            detalles: vec![DetalleMovimiento {
                id_producto: producto,
                cantidad: 2,
                lote_afectado: None,
            }],
        },
    )
    .await
    .expect("register");

    let stats = DashboardRepo::fetch_stats(&pool).await.expect("stats");

    assert_eq!(stats.productos_activos, 1);
    assert_eq!(stats.salidas_mes, 2);
    assert_eq!(stats.salidas_mes_anterior, 0);
    assert_eq!(stats.ingresos_mes_anterior, 0.0);
    // Valuation uses the post-movement stock: 10.0 * 6.
    assert!((stats.ingresos_mes - 60.0).abs() < f64::EPSILON);
    // Stock 6 > minimum 3, so nothing is critical yet.
    assert_eq!(stats.stock_critico, 0);

    // Drop stock to the minimum threshold: the product turns critical.
    sqlx::query("UPDATE productos SET stock_actual = 3 WHERE id_producto = $1")
        .bind(producto)
        .execute(&pool)
        .await
        .expect("force stock");
    let stats = DashboardRepo::fetch_stats(&pool).await.expect("stats");
    assert_eq!(stats.stock_critico, 1);
}
