//! Chunk type definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contiguous slice of a normalized document.
///
/// Chunks are the unit of content that gets embedded and indexed.
/// `start_char`/`end_char` are offsets into the normalized source text
/// (inclusive-exclusive, always on character boundaries), and `content`
/// is exactly that slice. Adjacent chunks overlap so downstream
/// embeddings keep context across split points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk text
    pub content: String,

    /// Starting offset in the normalized source text
    pub start_char: usize,

    /// Ending offset in the normalized source text
    pub end_char: usize,
}

impl Chunk {
    /// Create a new chunk over the given range.
    pub fn new(content: impl Into<String>, start_char: usize, end_char: usize) -> Self {
        Self {
            content: content.into(),
            start_char,
            end_char,
        }
    }

    /// Length of the chunk content.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the chunk is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// The chunks produced from one document.
///
/// Downstream vector stores key embeddings by
/// `(document_id, start_char, end_char)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChunks {
    /// ID of the source document
    pub document_id: Uuid,

    /// Chunks in source order
    pub chunks: Vec<Chunk>,
}

impl DocumentChunks {
    /// Number of chunks produced for this document.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chunk_len() {
        let chunk = Chunk::new("hello", 10, 15);
        assert_eq!(chunk.len(), 5);
        assert!(!chunk.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let chunk = Chunk::new("text", 0, 4);
        let json = serde_json::to_string(&chunk).unwrap();
        let back: Chunk = serde_json::from_str(&json).unwrap();
        assert_eq!(chunk, back);
    }
}
