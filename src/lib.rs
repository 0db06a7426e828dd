#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

use serde::{Serialize, Deserialize};

pub use error::{Error, Result};
pub use report::{Progress, Report};

pub mod config;
pub mod error;
pub mod logger;
pub mod pixel;
pub mod ppm;
pub mod render;
pub mod report;

/// Stores the size of an image.
///
/// Width and height are both at least 2,
/// because the gradient divides by `dimension - 1`.
/// Use `Size::new` to construct a validated size.
/// Deserializing goes through the same check.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "UncheckedSize")]
pub struct Size {
    width: u32,
    height: u32,
}

/// A size as stored in a file, before validation.
#[derive(Deserialize, Copy, Clone, Debug)]
pub struct UncheckedSize {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl TryFrom<UncheckedSize> for Size {
    type Error = Error;

    fn try_from(size: UncheckedSize) -> Result<Size> {
        Size::new(size.width, size.height)
    }
}

impl Size {
    /// Smallest accepted width or height.
    pub const MIN: u32 = 2;

    /// Creates a new size, rejecting degenerate dimensions.
    pub fn new(width: u32, height: u32) -> Result<Size> {
        if width < Size::MIN || height < Size::MIN {
            return Err(Error::InvalidDimension {width, height});
        }
        Ok(Size {width, height})
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {self.width}

    /// Number of rows (scanlines).
    pub fn height(&self) -> u32 {self.height}

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {(self.width, self.height)}

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u64 {self.width as u64 * self.height as u64}

    /// Checks that a size decoded from elsewhere is still valid.
    pub fn validate(self) -> Result<Size> {Size::new(self.width, self.height)}
}

impl Default for Size {
    fn default() -> Size {
        Size {width: 256, height: 256}
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(w, "{}x{}", self.width, self.height)
    }
}
