//! Plain-text PPM (`P3`) encoding.
//!
//! The header is three lines: the magic number, `width height`
//! and the maximum channel value.
//! Every pixel follows on its own line as `r g b`.

use std::io::Write;

use crate::{Error, Result, Size};

/// Magic number of the plain PPM format.
pub const MAGIC: &str = "P3";

/// Maximum channel value.
pub const MAX_VALUE: u8 = 255;

/// Writes the three header lines.
pub fn write_header<W: Write>(out: &mut W, size: Size) -> Result<()> {
    write!(out, "{}\n{} {}\n{}\n", MAGIC, size.width(), size.height(), MAX_VALUE)
        .map_err(Error::OutputWrite)
}

/// Writes one pixel line.
pub fn write_pixel<W: Write>(out: &mut W, rgb: [u8; 3]) -> Result<()> {
    writeln!(out, "{} {} {}", rgb[0], rgb[1], rgb[2]).map_err(Error::OutputWrite)
}

/// Writes a scanline, one pixel per line, left to right.
pub fn write_row<W, I>(out: &mut W, row: I) -> Result<()>
    where W: Write,
          I: IntoIterator<Item = [u8; 3]>
{
    for rgb in row {write_pixel(out, rgb)?}
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header() {
        let mut buf = vec![];
        write_header(&mut buf, Size::new(640, 480).unwrap()).unwrap();
        assert_eq!(buf, b"P3\n640 480\n255\n");
    }

    #[test]
    fn row() {
        let mut buf = vec![];
        write_row(&mut buf, [[0, 0, 0], [255, 10, 7]]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 0 0\n255 10 7\n");
    }
}
