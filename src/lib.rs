//! Textchunk Service Library
//!
//! A boundary-aware document chunking service for embedding pipelines.
//! Splits long documents into overlapping chunks that respect natural
//! language boundaries (headers, paragraphs, sentences, words).

pub mod api;
pub mod batch;
pub mod boundary;
pub mod error;
pub mod normalize;
pub mod segmenter;
pub mod types;

pub use boundary::{BoundaryFinder, Direction};
pub use error::ChunkError;
pub use normalize::normalize;
pub use segmenter::{chunk_text, TextSegmenter};
pub use types::{Chunk, ChunkOptions, ServiceConfig};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::batch::*;
    pub use crate::boundary::{BoundaryFinder, Direction};
    pub use crate::error::ChunkError;
    pub use crate::normalize::normalize;
    pub use crate::segmenter::{chunk_text, TextSegmenter};
    pub use crate::types::*;
}

/// Default chunk size in characters
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default overlap between adjacent chunks in characters
pub const DEFAULT_OVERLAP_SIZE: usize = 100;

/// How far the boundary finder searches around a split point (characters)
pub const BOUNDARY_SEARCH_WINDOW: usize = 100;

/// Maximum document size accepted for chunking (10MB)
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;
