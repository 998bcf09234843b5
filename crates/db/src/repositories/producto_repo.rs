//! Repository for the `productos` table.

use almacen_core::types::DbId;
use sqlx::PgPool;

use crate::models::producto::{Producto, ProductoInput, ProductoListado};

/// Joined projection shared by the list query. The availability label
/// thresholds (10 units) mirror what the dashboard has always displayed.
const LIST_COLUMNS: &str = "p.id_producto AS id, \
    p.codigo_producto AS sku, \
    p.nombre_producto AS name, \
    p.descripcion, \
    p.precio_unitario AS price, \
    m.nombre_marca AS provider, \
    p.stock_actual AS stock, \
    p.stock_minimo AS stockminimo, \
    p.fecha_creacion AS date, \
    p.id_categoria AS idcategoria, \
    CASE WHEN p.estado = 'Activo' THEN 1 ELSE 0 END AS estado, \
    c.nombre_categoria AS categoria_nombre, \
    p.id_marca, \
    p.lote, \
    p.estado AS estado_stock, \
    CASE \
        WHEN p.stock_actual > 10 THEN 'Disponible' \
        WHEN p.stock_actual > 0 AND p.stock_actual <= 10 THEN 'Pocas unidades' \
        ELSE 'Sin Stock' \
    END AS estado_stock_display";

const LIST_JOINS: &str = "FROM productos p \
    INNER JOIN categorias c ON p.id_categoria = c.id_categoria \
    INNER JOIN marcas m ON p.id_marca = m.id_marca";

/// Raw column list for single-row fetches.
const COLUMNS: &str = "id_producto, codigo_producto, nombre_producto, descripcion, \
    precio_unitario, stock_actual, stock_minimo, id_categoria, id_marca, lote, \
    estado, fecha_creacion";

/// Provides CRUD operations for products.
pub struct ProductoRepo;

impl ProductoRepo {
    /// List active products joined with category and brand names.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<ProductoListado>, sqlx::Error> {
        let query = format!("SELECT {LIST_COLUMNS} {LIST_JOINS} WHERE p.estado = 'Activo'");
        sqlx::query_as::<_, ProductoListado>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a product by internal ID regardless of status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Producto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productos WHERE id_producto = $1");
        sqlx::query_as::<_, Producto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new active product, returning its ID.
    ///
    /// The lot label is generated server-side as `L-YYYYMMDD-NNN`.
    /// `stock_minimo` defaults to 5 when the form leaves it empty.
    pub async fn create(
        pool: &PgPool,
        input: &ProductoInput,
        id_marca: DbId,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO productos \
                (codigo_producto, nombre_producto, descripcion, precio_unitario, \
                 stock_actual, stock_minimo, id_categoria, id_marca, estado, lote) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'Activo', \
                     'L-' || to_char(now(), 'YYYYMMDD') || '-' || \
                     lpad(floor(random() * 1000)::text, 3, '0')) \
             RETURNING id_producto",
        )
        .bind(&input.sku)
        .bind(&input.name)
        .bind(&input.descripcion)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.stockminimo.unwrap_or(5))
        .bind(input.idcategoria)
        .bind(id_marca)
        .fetch_one(pool)
        .await
    }

    /// Full-row update of an active product. Inactive rows are not touched.
    ///
    /// Stock hitting zero does not change `estado`; only an explicit soft
    /// delete deactivates a product.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductoInput,
        id_marca: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE productos SET \
                codigo_producto = $2, \
                nombre_producto = $3, \
                descripcion = $4, \
                precio_unitario = $5, \
                stock_actual = $6, \
                stock_minimo = $7, \
                id_categoria = $8, \
                id_marca = $9 \
             WHERE id_producto = $1 AND estado != 'Inactivo'",
        )
        .bind(id)
        .bind(&input.sku)
        .bind(&input.name)
        .bind(&input.descripcion)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.stockminimo.unwrap_or(5))
        .bind(input.idcategoria)
        .bind(id_marca)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a product (`estado = 'Inactivo'`). Returns `true` if a
    /// row was marked inactive.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE productos SET estado = 'Inactivo' WHERE id_producto = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
