//! HTTP request handlers for the chunking service.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::pipeline::process_document;
use crate::router::ChunkingRouter;
use crate::stats::ChunkStatistics;
use crate::types::{ChunkingOptions, DocumentInfo, ServiceConfig, TextChunk};

/// Application state shared across handlers.
pub struct AppState {
    pub router: ChunkingRouter,
    pub config: ServiceConfig,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Request to chunk one document's extracted text.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkDocumentRequest {
    /// Document identity from the upload/extraction layer
    #[serde(flatten)]
    pub document: DocumentInfo,

    /// The extracted text to chunk
    pub text: String,

    /// Chunking options; server defaults apply when omitted
    #[serde(default)]
    pub options: Option<ChunkingOptions>,
}

/// Response carrying the chunk list and its aggregate statistics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkDocumentResponse {
    pub chunks: Vec<TextChunk>,
    pub statistics: ChunkStatistics,
}

/// Chunk a document.
///
/// Option validation failures map to 422 with the offending parameter
/// named in the error body; splitting itself cannot fail.
pub async fn chunk_document(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChunkDocumentRequest>,
) -> Result<Json<ChunkDocumentResponse>, (StatusCode, Json<serde_json::Value>)> {
    let options = request
        .options
        .unwrap_or_else(|| state.config.default_options());

    info!(
        file_id = %request.document.file_id,
        file_name = %request.document.file_name,
        method = %options.method,
        text_len = request.text.len(),
        "received chunk request"
    );

    match process_document(&request.text, &request.document, &options) {
        Ok(outcome) => Ok(Json(ChunkDocumentResponse {
            chunks: outcome.chunks,
            statistics: outcome.statistics,
        })),
        Err(err) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": err.to_string() })),
        )),
    }
}

/// Information about one splitting method.
#[derive(Debug, Serialize)]
pub struct MethodInfo {
    name: String,
    description: String,
}

/// List the available splitting methods.
pub async fn list_methods(State(state): State<Arc<AppState>>) -> Json<Vec<MethodInfo>> {
    let methods = state
        .router
        .list_methods()
        .into_iter()
        .map(|(name, description)| MethodInfo {
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect();

    Json(methods)
}
