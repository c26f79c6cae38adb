//! Batch processing utilities for chunking many documents.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ChunkError;
use crate::segmenter::TextSegmenter;
use crate::types::{ChunkOptions, Document, DocumentChunks};
use crate::DEFAULT_MAX_DOCUMENT_SIZE;

/// Configuration for batch processing.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Whether to continue on individual document failures
    pub continue_on_error: bool,
    /// Maximum text size per document (bytes)
    pub max_document_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            continue_on_error: true,
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
        }
    }
}

/// Result of batch processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub total_documents: usize,
    pub processed_documents: usize,
    pub failed_documents: usize,
    pub total_chunks: usize,
    pub errors: Vec<BatchError>,
}

/// Error during batch processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchError {
    pub document_id: Uuid,
    pub error: String,
}

/// Batch processor for chunking many documents in one pass.
///
/// Each document is segmented independently; a failure on one document
/// does not disturb the chunks of any other.
pub struct BatchProcessor {
    segmenter: Arc<TextSegmenter>,
    config: BatchConfig,
}

impl BatchProcessor {
    /// Create a new batch processor.
    pub fn new(segmenter: Arc<TextSegmenter>, config: BatchConfig) -> Self {
        Self { segmenter, config }
    }

    /// Chunk a batch of documents and return all per-document results.
    ///
    /// The options are validated once up front: an invalid configuration
    /// would fail every document identically, so it fails the whole batch.
    /// Oversized documents fail individually and are recorded in the
    /// result; with `continue_on_error` unset the first failure aborts.
    pub async fn process_batch(
        &self,
        documents: Vec<Document>,
        options: &ChunkOptions,
    ) -> Result<(Vec<DocumentChunks>, BatchResult), ChunkError> {
        options.validate()?;

        let total_documents = documents.len();
        let mut results = Vec::with_capacity(total_documents);
        let mut processed_documents = 0;
        let mut failed_documents = 0;
        let mut total_chunks = 0;
        let mut errors = Vec::new();

        info!(total_documents, "Starting batch chunking");

        for document in documents {
            match self.process_document(&document, options) {
                Ok(chunks) => {
                    total_chunks += chunks.chunk_count();
                    results.push(chunks);
                    processed_documents += 1;
                }
                Err(e) => {
                    failed_documents += 1;

                    if !self.config.continue_on_error {
                        return Err(e);
                    }

                    warn!(document_id = %document.id, error = %e, "Failed to chunk document");
                    errors.push(BatchError {
                        document_id: document.id,
                        error: e.to_string(),
                    });
                }
            }
        }

        let result = BatchResult {
            total_documents,
            processed_documents,
            failed_documents,
            total_chunks,
            errors,
        };

        info!(
            processed = processed_documents,
            failed = failed_documents,
            chunks = total_chunks,
            "Batch chunking complete"
        );

        Ok((results, result))
    }

    /// Process a batch with streaming output.
    ///
    /// Sends each document's chunks as soon as they are produced and
    /// stops early when the receiver is dropped.
    pub async fn process_batch_streaming(
        &self,
        documents: Vec<Document>,
        options: &ChunkOptions,
        sender: mpsc::Sender<DocumentChunks>,
    ) -> Result<BatchResult, ChunkError> {
        options.validate()?;

        let total_documents = documents.len();
        let mut processed_documents = 0;
        let mut failed_documents = 0;
        let mut total_chunks = 0;
        let mut errors = Vec::new();

        for document in documents {
            match self.process_document(&document, options) {
                Ok(chunks) => {
                    total_chunks += chunks.chunk_count();
                    processed_documents += 1;

                    if sender.send(chunks).await.is_err() {
                        warn!("Receiver dropped, stopping batch processing");
                        break;
                    }
                }
                Err(e) => {
                    failed_documents += 1;

                    if !self.config.continue_on_error {
                        return Err(e);
                    }

                    warn!(document_id = %document.id, error = %e, "Failed to chunk document");
                    errors.push(BatchError {
                        document_id: document.id,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(BatchResult {
            total_documents,
            processed_documents,
            failed_documents,
            total_chunks,
            errors,
        })
    }

    /// Chunk a single document, enforcing the size limit.
    fn process_document(
        &self,
        document: &Document,
        options: &ChunkOptions,
    ) -> Result<DocumentChunks, ChunkError> {
        if document.text.len() > self.config.max_document_size {
            return Err(ChunkError::DocumentTooLarge {
                size: document.text.len(),
                limit: self.config.max_document_size,
            });
        }

        let chunks = self.segmenter.segment(&document.text, options)?;
        Ok(DocumentChunks {
            document_id: document.id,
            chunks,
        })
    }
}
