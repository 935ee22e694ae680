//! Image metrics extraction.
//!
//! Reads pixel dimensions and content type from raw image bytes without a
//! full pixel decode - only the header is parsed.

use crate::error::MetricsError;
use image::ImageReader;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;

/// Metadata for a single image file.
///
/// Immutable once constructed; equality and ordering consider all four
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ImageMetrics {
    width: u32,
    height: u32,
    byte_size: u64,
    content_type: String,
}

impl ImageMetrics {
    /// Construct validated metrics. Width, height, and byte size must be
    /// positive; the content type must be non-empty.
    pub fn new(
        width: u32,
        height: u32,
        byte_size: u64,
        content_type: impl Into<String>,
    ) -> Result<Self, MetricsError> {
        let content_type = content_type.into();

        if width == 0 {
            return Err(MetricsError::ZeroWidth);
        }
        if height == 0 {
            return Err(MetricsError::ZeroHeight);
        }
        if byte_size == 0 {
            return Err(MetricsError::ZeroByteSize);
        }
        if content_type.trim().is_empty() {
            return Err(MetricsError::EmptyContentType);
        }

        Ok(Self {
            width,
            height,
            byte_size,
            content_type,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// File size in bytes
    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    /// Content type, e.g. `image/png`
    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}

impl std::fmt::Display for ImageMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} {} ({} bytes)",
            self.width, self.height, self.content_type, self.byte_size
        )
    }
}

/// Extract metrics from raw image bytes.
///
/// `path` is used for error context only. Fails with a decode error on
/// non-image or corrupt bytes.
pub fn extract_metrics(path: &Path, bytes: &[u8]) -> Result<ImageMetrics, MetricsError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| MetricsError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let format = reader.format().ok_or_else(|| MetricsError::Decode {
        path: path.to_path_buf(),
        reason: "unrecognized image format".to_string(),
    })?;

    let (width, height) = reader.into_dimensions().map_err(|e| MetricsError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    ImageMetrics::new(width, height, bytes.len() as u64, format.to_mime_type())
}
