// File: crates/trace-core/src/error.rs
// Summary: Render/serialization error type.

use thiserror::Error;

use crate::encode::ImageFormat;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("{format} encoding failed")]
    Encode { format: ImageFormat },

    #[error("unsupported output format {extension:?} (expected png, jpg, jpeg or svg)")]
    UnsupportedFormat { extension: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
