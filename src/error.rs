//! Error types for the chunking service.

use thiserror::Error;

/// Errors raised by the chunking pipeline.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// Chunking options are unusable: a zero chunk size, an overlap at
    /// least as large as the chunk size, or a configuration that cannot
    /// advance the segmentation cursor.
    #[error("invalid chunking configuration: {0}")]
    InvalidConfiguration(String),

    /// Document exceeds the size the service accepts for a single pass.
    #[error("document of {size} bytes exceeds the {limit} byte limit")]
    DocumentTooLarge { size: usize, limit: usize },
}

/// Result type for chunking operations.
pub type Result<T> = std::result::Result<T, ChunkError>;
