//! PNG loading utilities.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};

use crate::error::{Error, Result};

use super::PixelBuffer;

/// Load a PNG from disk and normalize it to 8-bit RGBA.
///
/// The file handle is released when this returns, whether decoding
/// succeeded or not.
///
/// # Errors
///
/// Returns [`Error::FileOpen`] if the file cannot be opened and
/// [`Error::Decode`] if its contents are not a valid PNG.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let image = decode_png(BufReader::new(file)).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Decode PNG bytes from a reader and normalize them to 8-bit RGBA.
///
/// # Errors
///
/// Returns the codec error if the stream is not a valid PNG.
pub fn decode_png<R: BufRead + Seek>(reader: R) -> image::ImageResult<PixelBuffer> {
    image::load(reader, ImageFormat::Png).map(normalize)
}

/// Convert any decoded image to 8-bit RGBA.
///
/// Red, green and blue are premultiplied by alpha, so a fully transparent
/// pixel reads as black. 16-bit channels keep only their top 8 bits after
/// premultiplication. Grayscale is expanded to equal red, green and blue.
/// Alpha itself is carried over unchanged.
#[must_use]
pub fn normalize(image: DynamicImage) -> PixelBuffer {
    match image {
        DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgba16(_) => premultiply_wide(&image.into_rgba16()),
        _ => premultiply(image.into_rgba8()),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn premultiply(mut narrow: PixelBuffer) -> PixelBuffer {
    for pixel in narrow.pixels_mut() {
        let alpha = u32::from(pixel[3]);
        for channel in &mut pixel.0[..3] {
            // widen to 16 bits, scale by alpha, keep the top byte
            let wide = u32::from(*channel) * 0x101;
            *channel = ((wide * alpha / 0xff) >> 8) as u8;
        }
    }
    narrow
}

#[allow(clippy::cast_possible_truncation)]
fn premultiply_wide(wide: &ImageBuffer<Rgba<u16>, Vec<u16>>) -> PixelBuffer {
    PixelBuffer::from_fn(wide.width(), wide.height(), |x, y| {
        let [r, g, b, a] = wide.get_pixel(x, y).0.map(u32::from);
        let scale = |channel: u32| ((channel * a / 0xffff) >> 8) as u8;
        Rgba([scale(r), scale(g), scale(b), (a >> 8) as u8])
    })
}
