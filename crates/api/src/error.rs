use almacen_core::error::CoreError;
use almacen_db::error::MovementError;
use almacen_db::repositories::incidencia_repo::IncidentError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain errors and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce the `{"error": "..."}` JSON bodies the
/// dashboard consumes. Messages stay in Spanish; they are user-visible.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `almacen_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A movement-transaction rejection.
    #[error(transparent)]
    Movement(#[from] MovementError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a user-visible message.
    #[error("{0}")]
    BadRequest(String),

    /// A missing resource with a user-visible message.
    #[error("{0}")]
    NotFound(String),

    /// An internal error; the message is logged, never sent to the client.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<IncidentError> for AppError {
    fn from(err: IncidentError) -> Self {
        match err {
            IncidentError::Core(core) => AppError::Core(core),
            IncidentError::Database(db) => AppError::Database(db),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} no encontrado"))
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                // Duplicate email and friends answer 400, matching what the
                // dashboard's error handling has always expected.
                CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Error interno del servidor".to_string(),
                    )
                }
            },

            // --- Movement transaction rejections ---
            AppError::Movement(movement) => match movement {
                MovementError::InvalidMovementType
                | MovementError::InvalidLineItem
                | MovementError::InsufficientStock { .. } => {
                    (StatusCode::BAD_REQUEST, movement.to_string())
                }
                MovementError::ProductNotFound { .. } => {
                    (StatusCode::NOT_FOUND, movement.to_string())
                }
                MovementError::Database(err) => {
                    tracing::error!(error = %err, "Error al registrar movimiento");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Error al registrar el movimiento".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and user-visible message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (PostgreSQL code 23505) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => {
            (StatusCode::NOT_FOUND, "Recurso no encontrado".to_string())
        }
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            (
                StatusCode::BAD_REQUEST,
                format!("Valor duplicado viola la restricción: {constraint}"),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error interno del servidor".to_string(),
            )
        }
    }
}
