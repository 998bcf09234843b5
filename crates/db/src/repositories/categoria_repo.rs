//! Repository for the `categorias` table.

use almacen_core::types::DbId;
use sqlx::PgPool;

use crate::models::categoria::{Categoria, CategoriaInput, CategoriaOpcion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id_categoria, nombre_categoria, descripcion, activo";

/// Provides CRUD operations for categories.
pub struct CategoriaRepo;

impl CategoriaRepo {
    /// List active categories.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Categoria>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categorias WHERE activo = TRUE");
        sqlx::query_as::<_, Categoria>(&query).fetch_all(pool).await
    }

    /// Compact id/name pairs for the product form.
    pub async fn list_options(pool: &PgPool) -> Result<Vec<CategoriaOpcion>, sqlx::Error> {
        sqlx::query_as::<_, CategoriaOpcion>(
            "SELECT id_categoria AS idcategoria, nombre_categoria AS nombre \
             FROM categorias WHERE activo = TRUE",
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a new category, returning its ID.
    pub async fn create(pool: &PgPool, input: &CategoriaInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO categorias (nombre_categoria, descripcion) \
             VALUES ($1, $2) RETURNING id_categoria",
        )
        .bind(&input.nombre_categoria)
        .bind(&input.descripcion)
        .fetch_one(pool)
        .await
    }

    /// Update an active category. Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CategoriaInput,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE categorias SET nombre_categoria = $2, descripcion = $3 \
             WHERE id_categoria = $1 AND activo = TRUE",
        )
        .bind(id)
        .bind(&input.nombre_categoria)
        .bind(&input.descripcion)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a category (`activo = FALSE`). Returns `true` if a row
    /// was deactivated.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE categorias SET activo = FALSE WHERE id_categoria = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
