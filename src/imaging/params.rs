//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`process`](crate::process) (which decides what
//! derivatives to create) and the [`backend`](super::backend) (which does
//! the actual pixel work). The separation allows swapping backends for a
//! recording mock in tests without changing orchestration logic.

use std::path::PathBuf;

/// Full specification for a resize: source, output path, exact target
/// dimensions. The output extension selects the encoded format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Specification for a PNG re-encode. `output` may equal `source` — a PNG
/// converting onto itself is an idempotent re-encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertParams {
    pub source: PathBuf,
    pub output: PathBuf,
}
