//! Error types for fetching, rendering, and exporting.

use thiserror::Error;

/// Errors raised while fetching survey responses from the remote store.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport or status error.
    #[error("Supabase request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("Unexpected response payload: {message}")]
    Payload { message: String },

    /// Required configuration is missing.
    #[error("Missing configuration: {name} is not set")]
    MissingConfig { name: String },
}

/// Errors raised while rasterizing a page or chart.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The generated SVG could not be parsed by the rasterizer.
    #[error("SVG parse failed: {message}")]
    SvgParse { message: String },

    /// Pixel buffer allocation failed (zero or overflowing dimensions).
    #[error("Pixmap allocation failed for {width}x{height}")]
    PixmapAlloc { width: u32, height: u32 },

    /// PNG encoding error.
    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] png::EncodingError),

    /// Filesystem error while writing an output artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while writing CSV/JSON export files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
