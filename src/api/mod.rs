//! HTTP API for the chunking service.

pub mod handlers;
