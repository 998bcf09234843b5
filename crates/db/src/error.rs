//! Errors produced by the stock-affecting movement transaction.

use almacen_core::types::DbId;

/// Failure modes of [`crate::repositories::MovimientoRepo::register`].
///
/// Every variant aborts the whole batch: the transaction rolls back and no
/// movement row or stock change persists. The display strings are the exact
/// messages the dashboard shows, so they stay in Spanish.
#[derive(Debug, thiserror::Error)]
pub enum MovementError {
    /// The referenced movement type does not exist or is deactivated.
    #[error("Tipo de movimiento no válido")]
    InvalidMovementType,

    /// A line item referenced a product that does not exist.
    #[error("Producto {producto} no encontrado")]
    ProductNotFound { producto: DbId },

    /// A decrementing line item asked for more units than are in stock.
    #[error("Stock insuficiente para el producto {producto}")]
    InsufficientStock { producto: DbId },

    /// A line item carried a non-positive quantity.
    #[error("Detalle de movimiento inválido")]
    InvalidLineItem,

    /// The underlying store failed mid-transaction.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
