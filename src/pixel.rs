//! Per-pixel gradient colors.

use crate::Size;

/// Scale from a unit fraction to a channel value.
///
/// Slightly below 256 so that fractions just under 1 truncate to 255
/// and an exact 1 does not reach 256.
pub const SCALE: f64 = 255.999;

/// Converts a fraction in `[0, 1]` to a channel value by truncation.
pub fn channel(frac: f64) -> u8 {(SCALE * frac) as u8}

/// Red fraction at column `x`.
pub fn red(size: Size, x: u32) -> f64 {
    x as f64 / (size.width() - 1) as f64
}

/// Green fraction at row `y`.
pub fn green(size: Size, y: u32) -> f64 {
    y as f64 / (size.height() - 1) as f64
}

/// Blue fraction at `(x, y)`.
pub fn blue(size: Size, x: u32, y: u32) -> f64 {
    (x as u64 * y as u64) as f64 / size.pixel_count() as f64
}

/// Computes the color of the pixel at column `x` and row `y`.
pub fn color(size: Size, x: u32, y: u32) -> [u8; 3] {
    [
        channel(red(size, x)),
        channel(green(size, y)),
        channel(blue(size, x, y)),
    ]
}
