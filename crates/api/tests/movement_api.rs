//! HTTP-level integration tests for movement registration.

mod common;

use almacen_core::types::DbId;
use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_producto(pool: &PgPool, codigo: &str, stock: i32) -> DbId {
    let id_categoria: DbId = sqlx::query_scalar(
        "INSERT INTO categorias (nombre_categoria) VALUES ('API') RETURNING id_categoria",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    let id_marca: DbId =
        sqlx::query_scalar("INSERT INTO marcas (nombre_marca) VALUES ('API') RETURNING id_marca")
            .fetch_one(pool)
            .await
            .unwrap();
    sqlx::query_scalar(
        "INSERT INTO productos \
            (codigo_producto, nombre_producto, precio_unitario, stock_actual, \
             stock_minimo, id_categoria, id_marca) \
         VALUES ($1, $1, 5.0, $2, 5, $3, $4) RETURNING id_producto",
    )
    .bind(codigo)
    .bind(stock)
    .bind(id_categoria)
    .bind(id_marca)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn create_usuario(pool: &PgPool) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO usuarios (nombre_completo, email, password_hash, id_rol) \
         VALUES ('Mov API', 'mov@test.com', 'x', 1) RETURNING id_usuario",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn tipo_salida(pool: &PgPool) -> DbId {
    sqlx::query_scalar(
        "SELECT id_tipo_movimiento FROM tipos_movimiento WHERE nombre_tipo = 'Salida'",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn stock_de(pool: &PgPool, id: DbId) -> i32 {
    sqlx::query_scalar("SELECT stock_actual FROM productos WHERE id_producto = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

fn body_movimiento(tipo: DbId, usuario: DbId, detalles: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id_tipo_movimiento": tipo,
        "fecha_movimiento": "2025-06-15",
        "id_usuario_responsable": usuario,
        "motivo": "venta",
        "detalles": detalles,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// A decrement of 3 against stock 10 commits: 201, stock 7.
#[sqlx::test(migrations = "../db/migrations")]
async fn decrement_movement_commits(pool: PgPool) {
    let producto = create_producto(&pool, "API-1", 10).await;
    let usuario = create_usuario(&pool).await;
    let salida = tipo_salida(&pool).await;
    let app = build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/movimientos",
        body_movimiento(
            salida,
            usuario,
            serde_json::json!([{ "id_producto": producto, "cantidad": 3 }]),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["mensaje"], "Movimiento registrado exitosamente");
    assert_eq!(body["productos_afectados"], 1);

    assert_eq!(stock_de(&pool, producto).await, 7);
}

/// The same request against stock 2 answers 400 with the exact message and
/// leaves stock untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn insufficient_stock_is_rejected(pool: PgPool) {
    let producto = create_producto(&pool, "API-2", 2).await;
    let usuario = create_usuario(&pool).await;
    let salida = tipo_salida(&pool).await;
    let app = build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/movimientos",
        body_movimiento(
            salida,
            usuario,
            serde_json::json!([{ "id_producto": producto, "cantidad": 3 }]),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        format!("Stock insuficiente para el producto {producto}")
    );

    assert_eq!(stock_de(&pool, producto).await, 2);
}

/// Unknown movement types answer 400; unknown products on a decrement 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_references_are_rejected(pool: PgPool) {
    let producto = create_producto(&pool, "API-3", 10).await;
    let usuario = create_usuario(&pool).await;
    let salida = tipo_salida(&pool).await;
    let app = build_test_app(pool.clone());

    let bad_tipo = post_json(
        app.clone(),
        "/api/movimientos",
        body_movimiento(
            9999,
            usuario,
            serde_json::json!([{ "id_producto": producto, "cantidad": 1 }]),
        ),
    )
    .await;
    assert_eq!(bad_tipo.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(bad_tipo).await["error"], "Tipo de movimiento no válido");

    let bad_producto = post_json(
        app,
        "/api/movimientos",
        body_movimiento(
            salida,
            usuario,
            serde_json::json!([{ "id_producto": 424242, "cantidad": 1 }]),
        ),
    )
    .await;
    assert_eq!(bad_producto.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(bad_producto).await["error"], "Producto 424242 no encontrado");
}

/// Missing required fields or an empty line-item list answer 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn incomplete_body_is_rejected(pool: PgPool) {
    let usuario = create_usuario(&pool).await;
    let salida = tipo_salida(&pool).await;
    let app = build_test_app(pool);

    let missing = post_json(
        app.clone(),
        "/api/movimientos",
        serde_json::json!({ "id_tipo_movimiento": salida }),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(missing).await["error"], "Faltan campos requeridos");

    let empty_detalles = post_json(
        app,
        "/api/movimientos",
        body_movimiento(salida, usuario, serde_json::json!([])),
    )
    .await;
    assert_eq!(empty_detalles.status(), StatusCode::BAD_REQUEST);
}

/// History and type listings serve the registered data.
#[sqlx::test(migrations = "../db/migrations")]
async fn history_and_types_are_served(pool: PgPool) {
    let producto = create_producto(&pool, "API-4", 10).await;
    let usuario = create_usuario(&pool).await;
    let salida = tipo_salida(&pool).await;
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/movimientos",
        body_movimiento(
            salida,
            usuario,
            serde_json::json!([{ "id_producto": producto, "cantidad": 4, "lote_afectado": "L-1" }]),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let tipos = get(app.clone(), "/api/movimientos/tipos").await;
    assert_eq!(tipos.status(), StatusCode::OK);
    let tipos = body_json(tipos).await;
    assert!(tipos.as_array().unwrap().len() >= 3);

    let historia = get(app.clone(), "/api/movimientos?tipo=Decrementa").await;
    assert_eq!(historia.status(), StatusCode::OK);
    let historia = body_json(historia).await;
    let filas = historia.as_array().unwrap();
    assert_eq!(filas.len(), 1);
    assert_eq!(filas[0]["cantidad"], 4);
    assert_eq!(filas[0]["tipo_movimiento"], "Salida");
    assert_eq!(filas[0]["responsable"], "Mov API");

    let top = get(app, "/api/movimientos/top-salidas?limit=5").await;
    assert_eq!(top.status(), StatusCode::OK);
    let top = body_json(top).await;
    assert_eq!(top[0]["total_salidas"], 4);
}
