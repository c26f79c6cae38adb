//! Core types for the chunking service.

mod chunk;
mod config;
mod document;

pub use chunk::{Chunk, DocumentChunks};
pub use config::{ChunkOptions, ServiceConfig};
pub use document::{BatchChunkRequest, ChunkRequest, ChunkResponse, Document};
