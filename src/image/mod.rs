//! PNG loading, normalization, and saving utilities.

mod load;
mod save;

pub use load::{decode_png, load_image, normalize};
pub use save::{ensure_not_terminal, save_image, write_png};

use image::RgbaImage;

use crate::error::Dimensions;

/// Row-major RGBA buffer with one byte per channel.
/// Length of the raw data is always `width * height * 4`.
pub type PixelBuffer = RgbaImage;

/// Number of channels in a normalized pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Alpha value written into every combined or generated pixel.
pub const OPAQUE: u8 = u8::MAX;

/// Dimensions of a pixel buffer.
#[must_use]
pub fn dimensions(image: &PixelBuffer) -> Dimensions {
    Dimensions::new(image.width(), image.height())
}
