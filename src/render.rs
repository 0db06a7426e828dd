//! Rendering the gradient.
//!
//! The streaming renderer writes plain PPM row by row.
//! With the `render` feature, the gradient can also be rendered
//! into an `RgbImage`, either on a single thread or with Rayon,
//! and saved in any format the `image` crate supports.

use std::io::{BufWriter, Write};

use crate::*;

/// Render plain PPM to a writer using single thread.
///
/// Calls `report` after every completed row selected by `r`,
/// and once with `Progress::Done` at the end unless reporting is off.
pub fn gen_to_writer<W, F>(r: Report, size: Size, out: &mut W, mut report: F) -> Result<()>
    where W: Write,
          F: FnMut(Progress)
{
    let (w, h) = size.dimensions();
    ppm::write_header(out, size)?;
    let ref mut rs = r.start();
    for y in 0..h {
        ppm::write_row(out, (0..w).map(|x| pixel::color(size, x, y)))?;
        if r.update(rs, y + 1) {report(Progress::Remaining(h - y - 1))};
    }
    out.flush().map_err(Error::OutputWrite)?;
    if r.is_enabled() {report(Progress::Done)};
    Ok(())
}

/// Render plain PPM to a writer, printing progress to standard error.
pub fn gen<W: Write>(r: Report, size: Size, out: W) -> Result<()> {
    log::info!("rendering {} image as plain PPM", size);
    let mut out = BufWriter::new(out);
    gen_to_writer(r, size, &mut out, report::stderr)?;
    log::debug!("wrote {} pixels", size.pixel_count());
    Ok(())
}

/// Render plain PPM into a string.
pub fn render_ppm_string(size: Size) -> Result<String> {
    let mut buf: Vec<u8> = vec![];
    gen_to_writer(Report::None, size, &mut buf, |_| {})?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(feature = "render")]
pub use self::buffer::*;

#[cfg(feature = "render")]
mod buffer {
    use super::*;

    use image::{Rgb, RgbImage};

    fn row(size: Size, y: u32) -> Vec<Rgb<u8>> {
        (0..size.width()).map(|x| Rgb(pixel::color(size, x, y))).collect()
    }

    fn image_size(img: &RgbImage) -> Result<Size> {
        let (w, h) = img.dimensions();
        Size::new(w, h)
    }

    /// Render to image using single thread.
    ///
    /// The image dimensions are the size of the gradient.
    pub fn gen_to_image<F>(r: Report, img: &mut RgbImage, mut report: F) -> Result<()>
        where F: FnMut(Progress)
    {
        let size = image_size(img)?;
        let (w, h) = size.dimensions();
        let ref mut rs = r.start();
        for y in 0..h {
            for x in 0..w {
                img.put_pixel(x, y, Rgb(pixel::color(size, x, y)));
            }
            if r.update(rs, y + 1) {report(Progress::Remaining(h - y - 1))};
        }
        if r.is_enabled() {report(Progress::Done)};
        Ok(())
    }

    /// Render to image using Rayon.
    ///
    /// Rows are computed in parallel and written into the image
    /// on the calling thread as they arrive.
    /// Progress counts completed rows regardless of their order.
    pub fn par_gen_to_image<F>(r: Report, img: &mut RgbImage, mut report: F) -> Result<()>
        where F: FnMut(Progress)
    {
        use rayon::iter::ParallelIterator;
        use rayon::iter::IntoParallelIterator;
        use std::sync::mpsc::channel;

        let size = image_size(img)?;
        let h = size.height();
        let (sender, receiver) = channel::<(u32, Vec<Rgb<u8>>)>();
        std::thread::scope(|s| {
            s.spawn(move || {
                (0..h).into_par_iter().for_each_with(sender, |sender, y| {
                    // The receiver only hangs up after every row arrived.
                    let _ = sender.send((y, row(size, y)));
                });
            });

            let ref mut rs = r.start();
            for (done, (y, pixels)) in receiver.iter().enumerate() {
                for (x, pixel) in pixels.into_iter().enumerate() {
                    img.put_pixel(x as u32, y, pixel);
                }
                let done = done as u32 + 1;
                if r.update(rs, done) {report(Progress::Remaining(h - done))};
            }
        });
        if r.is_enabled() {report(Progress::Done)};
        Ok(())
    }

    /// Render to file, choosing the format from the extension.
    pub fn gen_file(parallel: bool, r: Report, size: Size, file: &str) -> Result<()> {
        log::info!("rendering {} image to `{}`", size, file);
        let mut img = RgbImage::new(size.width(), size.height());
        if parallel {
            log::debug!("using {} threads", rayon::current_num_threads());
            par_gen_to_image(r, &mut img, report::stderr)?;
        } else {
            gen_to_image(r, &mut img, report::stderr)?;
        }
        img.save(file)?;
        Ok(())
    }
}
