use thiserror::Error;

/// Errors raised when building or reading a [`crate::Picture`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PictureError {
    #[error("invalid picture dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} picture")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("expected {expected} pixels, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

/// A color string that is not `#rrggbb` or `#rgb`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}, expected #rrggbb")]
pub struct ColorParseError(pub String);

/// Errors from importing or exporting pictures as raster images
#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Picture(#[from] PictureError),
}

/// Errors from loading an [`crate::EditorConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
