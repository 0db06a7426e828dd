//! Error types.

use thiserror::Error;

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or rendering an image.
#[derive(Error, Debug)]
pub enum Error {
    /// Width or height is too small to compute the gradient.
    ///
    /// Both dimensions must be at least 2,
    /// since the color formula divides by `dimension - 1`.
    #[error("Invalid dimension {width}x{height}: width and height must both be at least 2")]
    InvalidDimension {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Failed to write to the pixel data stream.
    #[error("Failed to write output: {0}")]
    OutputWrite(#[source] std::io::Error),

    /// Failed to open or create a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode a config file.
    #[error("Invalid config file: {0}")]
    Config(#[from] bincode::Error),

    /// Failed to save an image buffer.
    #[cfg(feature = "render")]
    #[error("Failed to save image: {0}")]
    Image(#[from] image::ImageError),
}
