// File: crates/trace-core/src/encode.rs
// Summary: Output format selection by file extension and raster encoding.

use std::fmt;
use std::path::Path;

use skia_safe as skia;

use crate::error::RenderError;

/// Output encodings selected from the destination file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Svg,
}

impl ImageFormat {
    /// Map a destination path to an encoder by its extension
    /// (case-insensitive). A missing or unknown extension is an error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "svg" => Ok(Self::Svg),
            _ => Err(RenderError::UnsupportedFormat { extension: ext.to_string() }),
        }
    }

    pub fn is_raster(self) -> bool {
        !matches!(self, Self::Svg)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Svg => "SVG",
        };
        f.write_str(name)
    }
}

/// Encode a raster snapshot with the Skia encoder for `format`.
/// SVG has no raster encoder and is rejected here; it renders through the
/// SVG canvas instead.
pub(crate) fn encode_image(image: &skia::Image, format: ImageFormat) -> Result<Vec<u8>, RenderError> {
    let skia_format = match format {
        ImageFormat::Png => skia::EncodedImageFormat::PNG,
        ImageFormat::Jpeg => skia::EncodedImageFormat::JPEG,
        ImageFormat::Svg => return Err(RenderError::Encode { format }),
    };
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia_format)
        .ok_or(RenderError::Encode { format })?;
    Ok(data.as_bytes().to_vec())
}
