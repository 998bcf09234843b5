//! HTTP-level integration tests for the CRUD resources
//! (productos, categorias, marcas, usuarios, incidencias).

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Categorias / marcas
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn categoria_lifecycle_over_http(pool: PgPool) {
    let app = build_test_app(pool);

    let created = post_json(
        app.clone(),
        "/api/categorias",
        serde_json::json!({ "nombre_categoria": "Bebidas", "descripcion": "Líquidos" }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);
    let created = body_json(created).await;
    assert_eq!(created["mensaje"], "Categoría creada exitosamente");
    let id = created["id"].as_i64().unwrap();

    let listado = body_json(get(app.clone(), "/api/categorias").await).await;
    assert!(listado
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id_categoria"] == id));

    let updated = put_json(
        app.clone(),
        &format!("/api/categorias/{id}"),
        serde_json::json!({ "nombre_categoria": "Bebidas Frías", "descripcion": null }),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);

    let deleted = delete(app.clone(), &format!("/api/categorias/{id}")).await;
    assert_eq!(deleted.status(), StatusCode::OK);

    // Gone from the active list, and further updates answer 404.
    let listado = body_json(get(app.clone(), "/api/categorias").await).await;
    assert!(listado
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["id_categoria"] != id));

    let missing = put_json(
        app,
        &format!("/api/categorias/{id}"),
        serde_json::json!({ "nombre_categoria": "X" }),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn marca_lifecycle_over_http(pool: PgPool) {
    let app = build_test_app(pool);

    let created = post_json(
        app.clone(),
        "/api/marcas",
        serde_json::json!({
            "nombre_marca": "Andina",
            "contacto": "Carla",
            "telefono": "999888777",
            "email": "ventas@andina.test",
            "direccion": null,
        }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);
    let id = body_json(created).await["id"].as_i64().unwrap();

    let deleted = delete(app.clone(), &format!("/api/marcas/{id}")).await;
    assert_eq!(deleted.status(), StatusCode::OK);

    let listado = body_json(get(app, "/api/marcas").await).await;
    assert!(listado.as_array().unwrap().iter().all(|m| m["id_marca"] != id));
}

// ---------------------------------------------------------------------------
// Productos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn producto_lifecycle_over_http(pool: PgPool) {
    let app = build_test_app(pool);

    post_json(
        app.clone(),
        "/api/categorias",
        serde_json::json!({ "nombre_categoria": "Snacks" }),
    )
    .await;
    post_json(
        app.clone(),
        "/api/marcas",
        serde_json::json!({ "nombre_marca": "Sierra" }),
    )
    .await;

    let categorias = body_json(get(app.clone(), "/api/productos/categorias").await).await;
    let idcategoria = categorias[0]["idcategoria"].as_i64().unwrap();

    let proveedores = body_json(get(app.clone(), "/api/productos/proveedores").await).await;
    assert_eq!(proveedores, serde_json::json!(["Sierra"]));

    let producto = serde_json::json!({
        "sku": "SNK-01",
        "name": "Galletas",
        "descripcion": "Paquete x6",
        "price": 3.5,
        "provider": "Sierra",
        "stock": 15,
        "stockminimo": null,
        "idcategoria": idcategoria,
    });

    let created = post_json(app.clone(), "/api/productos", producto.clone()).await;
    assert_eq!(created.status(), StatusCode::OK);
    let created = body_json(created).await;
    assert_eq!(created["mensaje"], "Producto guardado exitosamente");
    let id = created["id"].as_i64().unwrap();

    let listado = body_json(get(app.clone(), "/api/productos").await).await;
    let fila = listado
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == id)
        .expect("product listed")
        .clone();
    assert_eq!(fila["sku"], "SNK-01");
    assert_eq!(fila["provider"], "Sierra");
    assert_eq!(fila["estado_stock_display"], "Disponible");

    // Unknown brand name on create answers 400.
    let mut sin_marca = producto.clone();
    sin_marca["provider"] = serde_json::json!("NoExiste");
    let rejected = post_json(app.clone(), "/api/productos", sin_marca).await;
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(rejected).await["error"], "Marca no encontrada o inactiva");

    let deleted = delete(app.clone(), &format!("/api/productos/{id}")).await;
    assert_eq!(deleted.status(), StatusCode::OK);

    // Updating an inactive product answers 404.
    let updated = put_json(app, &format!("/api/productos/{id}"), producto).await;
    assert_eq!(updated.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Usuarios
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn usuario_lifecycle_over_http(pool: PgPool) {
    let app = build_test_app(pool);

    let body = serde_json::json!({
        "nombre_completo": "Rosa Díaz",
        "email": "rosa@test.com",
        "password": "segura-123",
        "id_rol": 1,
    });
    let created = post_json(app.clone(), "/api/usuarios", body.clone()).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let id = body_json(created).await["id"].as_i64().unwrap();

    // Duplicate email answers 400 with the exact message.
    let duplicate = post_json(app.clone(), "/api/usuarios", body).await;
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(duplicate).await["error"], "El email ya está registrado");

    // Missing fields answer 400.
    let incomplete = post_json(
        app.clone(),
        "/api/usuarios",
        serde_json::json!({ "email": "otro@test.com" }),
    )
    .await;
    assert_eq!(incomplete.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(incomplete).await["error"],
        "Todos los campos son obligatorios"
    );

    // The list is the active users joined with their role.
    let listado = body_json(get(app.clone(), "/api/usuarios").await).await;
    let fila = listado
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == id)
        .expect("user listed")
        .clone();
    assert_eq!(fila["rol_nombre"], "Administrador");
    assert_eq!(fila["estado"], 1);

    // Partial update touches only the given field.
    let updated = put_json(
        app.clone(),
        &format!("/api/usuarios/{id}"),
        serde_json::json!({ "nombre_completo": "Rosa D. Vega" }),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);

    // Another user's email is rejected on update.
    post_json(
        app.clone(),
        "/api/usuarios",
        serde_json::json!({
            "nombre_completo": "Otro",
            "email": "otro@test.com",
            "password": "segura-123",
            "id_rol": 1,
        }),
    )
    .await;
    let conflicted = put_json(
        app.clone(),
        &format!("/api/usuarios/{id}"),
        serde_json::json!({ "email": "otro@test.com" }),
    )
    .await;
    assert_eq!(conflicted.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(conflicted).await["error"],
        "El email ya está registrado por otro usuario"
    );

    // Roles listing for the form.
    let roles = body_json(get(app.clone(), "/api/usuarios/roles").await).await;
    assert!(roles.as_array().unwrap().iter().any(|r| r["nombre"] == "Administrador"));

    // The alias mount answers the same data.
    let alias = get(app.clone(), "/api/modulo_user").await;
    assert_eq!(alias.status(), StatusCode::OK);

    let deleted = delete(app.clone(), &format!("/api/usuarios/{id}")).await;
    assert_eq!(deleted.status(), StatusCode::OK);
    let listado = body_json(get(app, "/api/usuarios").await).await;
    assert!(listado.as_array().unwrap().iter().all(|u| u["id"] != id));
}

// ---------------------------------------------------------------------------
// Incidencias
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn incidencia_lifecycle_over_http(pool: PgPool) {
    // Seed product + user directly.
    let id_categoria: i64 = sqlx::query_scalar(
        "INSERT INTO categorias (nombre_categoria) VALUES ('Inc') RETURNING id_categoria",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    let id_marca: i64 =
        sqlx::query_scalar("INSERT INTO marcas (nombre_marca) VALUES ('Inc') RETURNING id_marca")
            .fetch_one(&pool)
            .await
            .unwrap();
    let id_producto: i64 = sqlx::query_scalar(
        "INSERT INTO productos \
            (codigo_producto, nombre_producto, precio_unitario, stock_actual, \
             stock_minimo, id_categoria, id_marca) \
         VALUES ('INC-1', 'Inc', 1.0, 9, 1, $1, $2) RETURNING id_producto",
    )
    .bind(id_categoria)
    .bind(id_marca)
    .fetch_one(&pool)
    .await
    .unwrap();
    let id_usuario: i64 = sqlx::query_scalar(
        "INSERT INTO usuarios (nombre_completo, email, password_hash, id_rol) \
         VALUES ('Inc', 'inc@test.com', 'x', 1) RETURNING id_usuario",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let app = build_test_app(pool.clone());

    let tipos = body_json(get(app.clone(), "/api/incidencias/tipos").await).await;
    let id_tipo = tipos[0]["id"].as_i64().unwrap();

    let created = post_json(
        app.clone(),
        "/api/incidencias",
        serde_json::json!({
            "id_producto": id_producto,
            "id_tipo_incidencia": id_tipo,
            "cantidad_afectada": 2,
            "fecha_incidencia": "2025-06-15",
            "id_usuario_registro": id_usuario,
            "descripcion_detallada": "Botellas rotas",
            "accion_tomada": "Se retiraron del anaquel",
        }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(created).await["mensaje"],
        "Incidencia registrada correctamente"
    );

    // Stock is untouched by incidents.
    let stock: i32 =
        sqlx::query_scalar("SELECT stock_actual FROM productos WHERE id_producto = $1")
            .bind(id_producto)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stock, 9);

    // Unknown product answers 404.
    let missing = post_json(
        app.clone(),
        "/api/incidencias",
        serde_json::json!({
            "id_producto": 424242,
            "id_tipo_incidencia": id_tipo,
            "cantidad_afectada": 2,
            "fecha_incidencia": "2025-06-15",
            "id_usuario_registro": id_usuario,
            "descripcion_detallada": "x",
        }),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let historia = body_json(get(app, "/api/incidencias?limit=10").await).await;
    let filas = historia.as_array().unwrap();
    assert_eq!(filas.len(), 1);
    assert_eq!(filas[0]["cantidad_afectada"], 2);
    assert_eq!(filas[0]["nombre_producto"], "Inc");
}
