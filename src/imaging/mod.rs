//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize** | `resize_exact` + Lanczos3 |
//! | **PNG re-encode** | `image::codecs::png::PngEncoder` |
//!
//! The module is split into:
//! - **Parameters**: data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use params::{ConvertParams, ResizeParams};
pub use rust_backend::RustBackend;
