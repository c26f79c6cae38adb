//! Configuration types for chunking.

use serde::{Deserialize, Serialize};

use crate::error::ChunkError;
use crate::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_DOCUMENT_SIZE, DEFAULT_OVERLAP_SIZE};

/// Options for a single chunking operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkOptions {
    /// Target chunk size in characters
    pub chunk_size: usize,

    /// Characters of context shared between adjacent chunks
    pub overlap_size: usize,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap_size: DEFAULT_OVERLAP_SIZE,
        }
    }
}

impl ChunkOptions {
    /// Create options with the given chunk size.
    pub fn with_size(size: usize) -> Self {
        Self {
            chunk_size: size,
            ..Default::default()
        }
    }

    /// Set the overlap.
    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap_size = overlap;
        self
    }

    /// Check that the options can produce a terminating segmentation.
    ///
    /// The chunk size must be positive and strictly larger than the
    /// overlap; anything else either loops forever or degenerates into
    /// chunks that are all overlap.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.chunk_size == 0 {
            return Err(ChunkError::InvalidConfiguration(
                "chunk_size must be positive".to_string(),
            ));
        }
        if self.overlap_size >= self.chunk_size {
            return Err(ChunkError::InvalidConfiguration(format!(
                "overlap_size ({}) must be smaller than chunk_size ({})",
                self.overlap_size, self.chunk_size
            )));
        }
        Ok(())
    }
}

/// Global service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Default chunk size in characters
    pub default_chunk_size: usize,

    /// Default overlap between adjacent chunks in characters
    pub default_overlap_size: usize,

    /// Maximum document size in bytes accepted per request
    pub max_document_size: usize,

    /// Maximum documents accepted in one batch request
    pub max_batch_documents: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_chunk_size: DEFAULT_CHUNK_SIZE,
            default_overlap_size: DEFAULT_OVERLAP_SIZE,
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
            max_batch_documents: 64,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            default_chunk_size: std::env::var("CHUNK_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CHUNK_SIZE),
            default_overlap_size: std::env::var("OVERLAP_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_OVERLAP_SIZE),
            max_document_size: std::env::var("MAX_DOCUMENT_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_DOCUMENT_SIZE),
            max_batch_documents: std::env::var("MAX_BATCH_DOCUMENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(64),
        }
    }

    /// The default chunk options implied by this configuration.
    pub fn default_options(&self) -> ChunkOptions {
        ChunkOptions {
            chunk_size: self.default_chunk_size,
            overlap_size: self.default_overlap_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ChunkOptions::default();
        assert_eq!(options.chunk_size, 1000);
        assert_eq!(options.overlap_size, 100);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let options = ChunkOptions::with_size(0);
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_overlap_must_be_smaller_than_chunk_size() {
        assert!(ChunkOptions::with_size(100).with_overlap(100).validate().is_err());
        assert!(ChunkOptions::with_size(100).with_overlap(150).validate().is_err());
        assert!(ChunkOptions::with_size(100).with_overlap(99).validate().is_ok());
    }
}
