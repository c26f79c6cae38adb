//! HTTP request handlers for the chunking service.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::batch::{BatchConfig, BatchProcessor, BatchResult};
use crate::error::ChunkError;
use crate::segmenter::TextSegmenter;
use crate::types::{
    BatchChunkRequest, ChunkRequest, ChunkResponse, DocumentChunks, ServiceConfig,
};

/// Application state shared across handlers.
pub struct AppState {
    pub segmenter: Arc<TextSegmenter>,
    pub config: ServiceConfig,
}

/// JSON error body returned by fallible endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse { error: error.into() }))
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

/// Chunk a single document.
pub async fn chunk_document(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChunkRequest>,
) -> Result<Json<ChunkResponse>, ApiError> {
    let document_id = request.document_id.unwrap_or_else(Uuid::new_v4);

    if request.text.len() > state.config.max_document_size {
        return Err(api_error(
            StatusCode::PAYLOAD_TOO_LARGE,
            ChunkError::DocumentTooLarge {
                size: request.text.len(),
                limit: state.config.max_document_size,
            }
            .to_string(),
        ));
    }

    let options = request.options(&state.config);

    info!(
        %document_id,
        text_len = request.text.len(),
        chunk_size = options.chunk_size,
        overlap_size = options.overlap_size,
        "Received chunk request"
    );

    match state.segmenter.segment(&request.text, &options) {
        Ok(chunks) => Ok(Json(ChunkResponse {
            document_id,
            chunk_count: chunks.len(),
            chunks,
        })),
        Err(e) => {
            warn!(
                %document_id,
                chunk_size = options.chunk_size,
                overlap_size = options.overlap_size,
                error = %e,
                "Chunking failed"
            );
            Err(api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
        }
    }
}

/// Response for a batch chunk request.
#[derive(Debug, Serialize)]
pub struct BatchChunkResponse {
    pub results: Vec<DocumentChunks>,
    pub summary: BatchResult,
}

/// Chunk a batch of documents.
pub async fn chunk_batch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BatchChunkRequest>,
) -> Result<Json<BatchChunkResponse>, ApiError> {
    if request.documents.len() > state.config.max_batch_documents {
        return Err(api_error(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "batch of {} documents exceeds the {} document limit",
                request.documents.len(),
                state.config.max_batch_documents
            ),
        ));
    }

    let options = request.options(&state.config);
    let processor = BatchProcessor::new(
        Arc::clone(&state.segmenter),
        BatchConfig {
            max_document_size: state.config.max_document_size,
            ..Default::default()
        },
    );

    match processor.process_batch(request.documents, &options).await {
        Ok((results, summary)) => Ok(Json(BatchChunkResponse { results, summary })),
        Err(e) => {
            warn!(
                chunk_size = options.chunk_size,
                overlap_size = options.overlap_size,
                error = %e,
                "Batch chunking failed"
            );
            Err(api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
        }
    }
}

/// Effective defaults and limits.
#[derive(Debug, Serialize)]
pub struct ChunkDefaultsResponse {
    chunk_size: usize,
    overlap_size: usize,
    max_document_size: usize,
    max_batch_documents: usize,
}

/// Report the service's default options and limits.
pub async fn get_chunk_defaults(
    State(state): State<Arc<AppState>>,
) -> Json<ChunkDefaultsResponse> {
    Json(ChunkDefaultsResponse {
        chunk_size: state.config.default_chunk_size,
        overlap_size: state.config.default_overlap_size,
        max_document_size: state.config.max_document_size,
        max_batch_documents: state.config.max_batch_documents,
    })
}
