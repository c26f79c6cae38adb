//! Document types and request/response definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Chunk, ChunkOptions, ServiceConfig};

/// A document to be chunked.
///
/// This is the input unit received from the ingestion pipeline. The id
/// keys the document's chunks (and their embeddings) downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier for this document
    pub id: Uuid,

    /// The raw text to chunk
    pub text: String,

    /// Additional metadata from the source system
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Document {
    /// Create a document with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            metadata: serde_json::Value::Null,
        }
    }

    /// Raw content length in bytes.
    pub fn content_len(&self) -> usize {
        self.text.len()
    }
}

/// Request to chunk a single document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRequest {
    /// ID of the document; generated when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Uuid>,

    /// The text to chunk
    pub text: String,

    /// Override for the default chunk size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<usize>,

    /// Override for the default overlap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_size: Option<usize>,
}

impl ChunkRequest {
    /// Resolve the effective options, falling back to service defaults.
    pub fn options(&self, config: &ServiceConfig) -> ChunkOptions {
        ChunkOptions {
            chunk_size: self.chunk_size.unwrap_or(config.default_chunk_size),
            overlap_size: self.overlap_size.unwrap_or(config.default_overlap_size),
        }
    }
}

/// Response for a single-document chunk request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkResponse {
    /// ID of the chunked document
    pub document_id: Uuid,

    /// Number of chunks produced
    pub chunk_count: usize,

    /// The chunks in source order
    pub chunks: Vec<Chunk>,
}

/// Request to chunk a batch of documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchChunkRequest {
    /// Documents to chunk
    pub documents: Vec<Document>,

    /// Override for the default chunk size, applied to every document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<usize>,

    /// Override for the default overlap, applied to every document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_size: Option<usize>,
}

impl BatchChunkRequest {
    /// Resolve the effective options, falling back to service defaults.
    pub fn options(&self, config: &ServiceConfig) -> ChunkOptions {
        ChunkOptions {
            chunk_size: self.chunk_size.unwrap_or(config.default_chunk_size),
            overlap_size: self.overlap_size.unwrap_or(config.default_overlap_size),
        }
    }
}
