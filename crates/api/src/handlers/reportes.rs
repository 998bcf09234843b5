//! Handlers for the `/api/reportes` resource.
//!
//! The dashboard renders PDFs client-side and uploads them here as base64;
//! this module archives the bytes (with a SHA-256 content hash) and serves
//! them back for download.

use almacen_core::types::DbId;
use almacen_db::models::reporte::{CreateReporte, ReporteResumen};
use almacen_db::repositories::ReporteRepo;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// The three report types the archive accepts.
const ALLOWED_TIPOS: [&str; 3] = [
    "Reporte_Productos",
    "Reporte_Incidencia",
    "Reporte_Productos_Mayor_Salida",
];

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query params for `GET /api/reportes`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Max rows to return. Defaults to 20, floor 1.
    pub limit: Option<i64>,
}

/// Query params for `GET /api/reportes/ultimos`.
#[derive(Debug, Deserialize)]
pub struct UltimosQuery {
    pub limit: Option<i64>,
    pub tipo: Option<String>,
    /// Matches the `subtipo` key inside the stored generation parameters.
    pub subtipo: Option<String>,
}

/// Request body for `POST /api/reportes/upload`.
#[derive(Debug, Deserialize)]
pub struct UploadReporteRequest {
    pub filename: Option<String>,
    #[serde(rename = "dataBase64")]
    pub data_base64: Option<String>,
    pub tipo_reporte: Option<String>,
    pub id_usuario_generador: Option<DbId>,
    pub parametros: Option<serde_json::Value>,
}

/// Response for an archived report.
#[derive(Debug, Serialize)]
pub struct ReporteGuardado {
    pub mensaje: String,
    pub id_reporte: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/reportes
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<Vec<ReporteResumen>>> {
    let limit = params.limit.unwrap_or(20).max(1);
    let reportes = ReporteRepo::list(&state.pool, limit).await?;
    Ok(Json(reportes))
}

/// GET /api/reportes/ultimos
pub async fn ultimos(
    State(state): State<AppState>,
    Query(params): Query<UltimosQuery>,
) -> AppResult<Json<Vec<ReporteResumen>>> {
    let limit = params.limit.unwrap_or(20).max(1);
    let reportes = ReporteRepo::list_filtered(
        &state.pool,
        limit,
        params.tipo.as_deref(),
        params.subtipo.as_deref(),
    )
    .await?;
    Ok(Json(reportes))
}

/// POST /api/reportes/upload
pub async fn upload(
    State(state): State<AppState>,
    Json(input): Json<UploadReporteRequest>,
) -> AppResult<(StatusCode, Json<ReporteGuardado>)> {
    let (filename, data_base64) = match (input.filename, input.data_base64) {
        (Some(f), Some(d)) if !f.is_empty() && !d.is_empty() => (f, d),
        _ => {
            return Err(AppError::BadRequest(
                "filename y dataBase64 son requeridos".to_string(),
            ))
        }
    };

    let archivo_pdf = base64::engine::general_purpose::STANDARD
        .decode(data_base64.as_bytes())
        .map_err(|_| AppError::BadRequest("dataBase64 inválido".to_string()))?;

    let nombre_archivo = sanitize_filename(&filename);
    let tipo_reporte = canonical_tipo(input.tipo_reporte.as_deref());

    let hash_archivo = format!("{:x}", Sha256::digest(&archivo_pdf));
    let tamano_bytes = archivo_pdf.len() as i64;

    let id_reporte = ReporteRepo::create(
        &state.pool,
        &CreateReporte {
            tipo_reporte,
            id_usuario_generador: input.id_usuario_generador.unwrap_or(1),
            parametros: input.parametros,
            nombre_archivo,
            archivo_pdf,
            tipo_mime: "application/pdf".to_string(),
            tamano_bytes,
            hash_archivo,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReporteGuardado {
            mensaje: "Reporte guardado".to_string(),
            id_reporte,
        }),
    ))
}

/// GET /api/reportes/{id}/pdf
///
/// Stream the archived PDF back with its stored content type and an inline
/// disposition so the browser previews it.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let archivo = ReporteRepo::find_archivo(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Reporte no encontrado".to_string()))?;

    let headers = [
        (header::CONTENT_TYPE, archivo.tipo_mime),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", archivo.nombre_archivo),
        ),
        (header::CONTENT_LENGTH, archivo.tamano_bytes.to_string()),
    ];

    Ok((headers, archivo.archivo_pdf).into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Keep only filesystem-safe filename characters; everything else becomes
/// an underscore.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Map the submitted type onto the archive's canonical enum, translating
/// the labels older dashboard builds still send.
fn canonical_tipo(tipo: Option<&str>) -> String {
    let tipo = tipo.unwrap_or("Reporte_Productos");
    if ALLOWED_TIPOS.contains(&tipo) {
        return tipo.to_string();
    }
    match tipo {
        "Inventario Actual" => "Reporte_Productos",
        // Distinguished from plain product reports by parametros.subtipo.
        "Movimientos" => "Reporte_Productos",
        "Reporte Estadístico" => "Reporte_Incidencia",
        "Top Productos (Salidas)" => "Reporte_Productos_Mayor_Salida",
        _ => "Reporte_Productos",
    }
    .to_string()
}
