//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations every backend
//! must support: identify, resize, and convert_to_png.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust via the
//! `image` crate, statically linked into the binary. Orchestration code
//! stays backend-agnostic so tests can drive it with a recording mock.

use super::params::{ConvertParams, ResizeParams};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// `resize` targets exact dimensions — callers decide aspect handling, the
/// backend never second-guesses the requested size.
pub trait ImageBackend: Sync {
    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode, resize to exact target dimensions, and encode to the output
    /// path (format inferred from the output extension).
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;

    /// Decode and re-encode as PNG at the output path, whatever the source
    /// format was.
    fn convert_to_png(&self, params: &ConvertParams) -> Result<(), BackendError>;
}
